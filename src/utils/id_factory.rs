use uid::Id as IdT;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SyntaxNode(());

/// Identity of a syntax node. Fresh for every node built, so two nodes with
/// the same shape still tell apart.
pub type Id = IdT<SyntaxNode>;

pub fn new_uid() -> Id {
    Id::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_uid_is_fresh() {
        let first = new_uid();
        let second = new_uid();
        assert_ne!(first, second);
        assert_eq!(first, first);
    }
}
