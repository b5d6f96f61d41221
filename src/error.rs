//! Driver error type

/// Errors returned by every display operation.
///
/// `CommE` is the bus sink's error type; `PinE` is the error type shared by
/// the two control lines. Collaborator failures are carried through
/// untouched — no retry, no translation — and each operation is a single
/// bus transaction, so there is never partial state to unwind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Error<CommE, PinE> {
    /// The bus sink rejected the write outright.
    Comm(CommE),
    /// The bus sink accepted fewer bytes than the command holds.
    ShortWrite {
        /// Command length in bytes.
        expected: usize,
        /// Bytes the sink reported written.
        written: usize,
    },
    /// A control line (data/command select or reset) could not be driven.
    Pin(PinE),
}
