// ==========================================
// Gestão de Processos - domain layer
// ==========================================

pub mod processo;

pub use processo::{
    ImportOutcome, NewProcesso, Processo, ProcessoStatus, RawProcessoRecord,
};
