/// Backtracking assembler driving trial placement and undo
pub mod assembler;
/// Used-slot tracking for the tile arena
pub mod slots;
