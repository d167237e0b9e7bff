/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The Expression/Statement sum types and the Program root
/// - expressions: Payload structs for the expression variants
/// - statements: Payload structs for the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;
