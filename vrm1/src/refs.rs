use crate::Error;

/// Reference to a node owned by the host document.
///
/// Block decoders only ever produce `Unset` or `Unresolved`; the fixup pass
/// that runs after all blocks have decoded rewrites `Unresolved` into `Node`
/// (or fails the whole decode on an out-of-range index). Consumers therefore
/// never observe an unchecked index through [`NodeRef::get`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum NodeRef {
    /// The field was absent or carried a negative sentinel.
    #[default]
    Unset,
    /// Raw index collected during decode, not yet bounds-checked.
    Unresolved(usize),
    /// Position of the node in the host document's node collection.
    Node(usize),
}

/// Reference to a material owned by the host document.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MaterialRef {
    #[default]
    Unset,
    Unresolved(usize),
    Material(usize),
}

/// Reference to an image owned by the host document.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ImageRef {
    #[default]
    Unset,
    Unresolved(usize),
    Image(usize),
}

impl NodeRef {
    /// Position in the host node collection, if resolved.
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Node(index) => Some(index),
            _ => None,
        }
    }

    pub(crate) fn from_index(index: Option<i64>) -> Self {
        match index {
            Some(i) if i >= 0 => Self::Unresolved(i as usize),
            _ => Self::Unset,
        }
    }

    pub(crate) fn resolve(&mut self, count: usize, context: &'static str) -> Result<(), Error> {
        if let Self::Unresolved(index) = *self {
            if index >= count {
                return Err(Error::NodeIndexOutOfRange {
                    context,
                    index,
                    count,
                });
            }
            *self = Self::Node(index);
        }
        Ok(())
    }
}

impl MaterialRef {
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Material(index) => Some(index),
            _ => None,
        }
    }

    pub(crate) fn from_index(index: Option<i64>) -> Self {
        match index {
            Some(i) if i >= 0 => Self::Unresolved(i as usize),
            _ => Self::Unset,
        }
    }

    pub(crate) fn resolve(&mut self, count: usize, context: &'static str) -> Result<(), Error> {
        if let Self::Unresolved(index) = *self {
            if index >= count {
                return Err(Error::MaterialIndexOutOfRange {
                    context,
                    index,
                    count,
                });
            }
            *self = Self::Material(index);
        }
        Ok(())
    }
}

impl ImageRef {
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Image(index) => Some(index),
            _ => None,
        }
    }

    pub(crate) fn from_index(index: Option<i64>) -> Self {
        match index {
            Some(i) if i >= 0 => Self::Unresolved(i as usize),
            _ => Self::Unset,
        }
    }

    pub(crate) fn resolve(&mut self, count: usize, context: &'static str) -> Result<(), Error> {
        if let Self::Unresolved(index) = *self {
            if index >= count {
                return Err(Error::ImageIndexOutOfRange {
                    context,
                    index,
                    count,
                });
            }
            *self = Self::Image(index);
        }
        Ok(())
    }
}
