pub(crate) mod composition;
