pub(crate) mod palette;
pub(crate) mod prng;
pub(crate) mod starfield;
