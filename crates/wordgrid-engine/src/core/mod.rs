pub use self::{dictionary::*, grid::*, letter::*, line::*};

pub(crate) mod dictionary;
pub(crate) mod grid;
pub(crate) mod letter;
pub(crate) mod line;
