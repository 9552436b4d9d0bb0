//! Stages a wash cycle moves through.

crate::stage_enum! {
    /// Position of a cycle in the pour → wash → spin → release sequence.
    pub enum CycleStage {
        Idle => "idle",
        /// Load rules refused the batch; no device was touched.
        Rejected => "rejected",
        /// Water poured into the drum.
        Filled => "filled",
        Washed => "washed",
        Spun => "spun",
        /// Water released; the cycle is complete.
        Drained => "drained",
    }
    final: [Rejected, Drained]
    error: [Rejected]
}
