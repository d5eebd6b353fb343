mod practice_vm;
mod table_vm;

pub use practice_vm::{FieldVm, PracticeFrame, PracticeIntent, PracticeVm, start_practice};
pub use table_vm::{ConjugationTableVm, TableRowVm, load_table, load_verbs};
