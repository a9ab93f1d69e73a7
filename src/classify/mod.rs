pub(crate) mod outro;
pub(crate) mod symbols;
pub(crate) mod topic;
pub(crate) mod vocab;
