pub(crate) mod convert;
pub(crate) mod damage;
pub(crate) mod tables;
