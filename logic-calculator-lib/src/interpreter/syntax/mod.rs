pub mod expression_tree;
pub(crate) mod renderer;
pub(crate) mod syntax_visitor;
