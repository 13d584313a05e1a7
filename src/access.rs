use serde::{Deserialize, Serialize};

/// C# access modifier attached to the generated class or enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessType {
    #[default]
    None,
    Public,
    Protected,
    Internal,
    ProtectedInternal,
    Private,
    PrivateProtected,
}

impl AccessType {
    pub const ALL: [AccessType; 7] = [
        AccessType::None,
        AccessType::Public,
        AccessType::Protected,
        AccessType::Internal,
        AccessType::ProtectedInternal,
        AccessType::Private,
        AccessType::PrivateProtected,
    ];

    /// Modifier text as it prefixes a declaration, including the trailing space.
    /// `None` renders as nothing.
    pub fn keyword(self) -> &'static str {
        match self {
            AccessType::None => "",
            AccessType::Public => "public ",
            AccessType::Protected => "protected ",
            AccessType::Internal => "internal ",
            AccessType::ProtectedInternal => "protected internal ",
            AccessType::Private => "private ",
            AccessType::PrivateProtected => "private protected ",
        }
    }

    /// Whether the modifier is legal for a type declared outside any class
    pub fn is_public(self) -> bool {
        matches!(
            self,
            AccessType::None | AccessType::Public | AccessType::Internal
        )
    }
}
