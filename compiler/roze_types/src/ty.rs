use std::fmt;

/// The type of a value, or `Unknown` when it is only known at run time.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Unknown,
    Tag,
    Identifier,
    Bool,
    Float,
    Integer,
    String,
    List,
    KeyValue,
    Function,
}

impl Type {
    /// Number of variants; the length of a dispatch table.
    pub const COUNT: usize = 10;

    /// Every type, in index order.
    pub const ALL: [Type; Type::COUNT] = [
        Type::Unknown,
        Type::Tag,
        Type::Identifier,
        Type::Bool,
        Type::Float,
        Type::Integer,
        Type::String,
        Type::List,
        Type::KeyValue,
        Type::Function,
    ];

    /// Slot of this type in a dispatch table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Type::Unknown)
    }

    /// Whether two operand types are known to differ.
    ///
    /// `Unknown` on either side defers the question to run time.
    #[inline]
    pub fn conflicts_with(self, other: Type) -> bool {
        !self.is_unknown() && !other.is_unknown() && self != other
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Unknown => "unknown",
            Type::Tag => "tag",
            Type::Identifier => "identifier",
            Type::Bool => "bool",
            Type::Float => "float",
            Type::Integer => "int",
            Type::String => "string",
            Type::List => "list",
            Type::KeyValue => "key-value",
            Type::Function => "function",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
