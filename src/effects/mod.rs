pub(crate) mod overlay;
pub(crate) mod ripple;
pub(crate) mod symbol;
