/// Namespace separator used in configuration strings
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Namespace separator of Rust paths, accepted as an alternative
pub const PATH_SEPARATOR: &str = "::";

/// A parsed value object class reference
///
/// `Direct` names the value object class. `Resolved` names a resolver class
/// and a method on it that returns the value object class at runtime, written
/// as `"Resolver@method"` in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassRef {
    Direct(String),
    Resolved { resolver: String, method: String },
}

impl ClassRef {
    /// Parse a class reference string
    ///
    /// Only an `@` after the first character marks a resolver, so `"@method"`
    /// stays a direct (and most likely unregistered) class name.
    pub fn parse(reference: &str) -> Self {
        match reference.find('@') {
            Some(idx) if idx > 0 => ClassRef::Resolved {
                resolver: reference[..idx].to_string(),
                method: reference[idx + 1..].to_string(),
            },
            _ => ClassRef::Direct(reference.to_string()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ClassRef::Resolved { .. })
    }
}

impl std::fmt::Display for ClassRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassRef::Direct(class) => write!(f, "{}", class),
            ClassRef::Resolved { resolver, method } => write!(f, "{}@{}", resolver, method),
        }
    }
}

impl From<&str> for ClassRef {
    fn from(reference: &str) -> Self {
        ClassRef::parse(reference)
    }
}

impl From<String> for ClassRef {
    fn from(reference: String) -> Self {
        ClassRef::parse(&reference)
    }
}

/// The trailing segment of a class name
pub fn class_basename(class: &str) -> &str {
    let tail = class.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(class);
    tail.rsplit(PATH_SEPARATOR).next().unwrap_or(tail)
}

/// Whether the name carries any namespace separator, leading ones included
pub fn is_qualified(class: &str) -> bool {
    class_basename(class) != class
}

/// Strip leading separators so `\App\Money` and `App\Money` name the same class
pub fn normalize_class(class: &str) -> &str {
    let mut name = class;
    loop {
        if let Some(rest) = name.strip_prefix(NAMESPACE_SEPARATOR) {
            name = rest;
        } else if let Some(rest) = name.strip_prefix(PATH_SEPARATOR) {
            name = rest;
        } else {
            return name;
        }
    }
}

/// Replace the trailing segment of `sibling` with `class`
///
/// `App\Models\Order` and `StatusResolver` give `App\Models\StatusResolver`.
/// A sibling without namespace gives `class` unchanged.
pub fn qualify_in_namespace(sibling: &str, class: &str) -> String {
    let basename = class_basename(sibling);
    let namespace = sibling.strip_suffix(basename).unwrap_or("");
    format!("{}{}", namespace, class)
}
