/// Three opaque metadata flags attached to a profile property.
///
/// Nothing in this workspace branches on them; they are passed through
/// unchanged for callers (form renderers, exporters) that assign meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertyFlags(pub bool, pub bool, pub bool);

impl PropertyFlags {
    pub fn as_array(&self) -> [bool; 3] {
        [self.0, self.1, self.2]
    }
}
