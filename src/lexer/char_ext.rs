//! Useful character extensions.
pub trait CharExt {
    /// Whitespace the lexer drops without producing a token:
    /// space, newline, or tab. Nothing else qualifies.
    fn is_skippable(&self) -> bool;

    /// A character is alphabetic iff its upper-cased form differs from its
    /// lower-cased form, so non-ASCII letters qualify too.
    fn is_alpha(&self) -> bool;
}
impl CharExt for char {
    fn is_skippable(&self) -> bool {
        matches!(self, ' ' | '\n' | '\t')
    }

    fn is_alpha(&self) -> bool {
        self.to_uppercase().ne(self.to_lowercase())
    }
}
