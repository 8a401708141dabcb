//! Game constants and tuning parameters.

/// Controller tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Pacing ---

/// Delay between starting a run and presenting its result (seconds).
pub const SCORING_DELAY_SECS: f64 = 2.0;

/// Delay between a failed run and opening the tutor dialogue (seconds).
pub const FEEDBACK_DELAY_SECS: f64 = 1.0;

/// Delay between a correct tutor answer and the next dialogue step (seconds).
pub const DIALOGUE_ADVANCE_DELAY_SECS: f64 = 2.5;

// --- Scoring table ---

/// Coverage (%) and signal (dBm) with no transmitter on the board.
pub const COVERAGE_NO_TRANSMITTER: f64 = 0.0;
pub const SIGNAL_NO_TRANSMITTER: f64 = -120.0;

/// Single transmitter: the bleachers shadow most of the stands.
pub const COVERAGE_SINGLE_TRANSMITTER: f64 = 45.0;
pub const SIGNAL_SINGLE_TRANSMITTER: f64 = -95.0;

/// Two or more transmitters without a reflector.
pub const COVERAGE_MULTI_TRANSMITTER: f64 = 75.0;
pub const SIGNAL_MULTI_TRANSMITTER: f64 = -85.0;

/// Two or more transmitters plus at least one RIS panel.
pub const COVERAGE_MULTI_TRANSMITTER_RIS: f64 = 98.0;
pub const SIGNAL_MULTI_TRANSMITTER_RIS: f64 = -65.0;

/// SNR = signal + this offset (dB).
pub const SNR_OFFSET_DB: f64 = 105.0;

/// Latency with at least one transmitter (ms).
pub const LATENCY_CONNECTED_MS: f64 = 8.0;

/// Latency with no transmitter (ms).
pub const LATENCY_DISCONNECTED_MS: f64 = 100.0;

/// Power draw per transmitter (W).
pub const POWER_PER_TRANSMITTER_W: f64 = 20.0;

/// Coverage required for a successful run (%).
pub const SUCCESS_COVERAGE_PERCENT: f64 = 95.0;

// --- Pre-run display metrics ---

pub const INITIAL_SIGNAL_DBM: f64 = -110.0;
pub const INITIAL_SNR_DB: f64 = 5.0;
pub const INITIAL_LATENCY_MS: f64 = 45.0;

// --- Board ---

/// Length of a generated component id (base-36 characters).
pub const COMPONENT_ID_LEN: usize = 9;

/// Maximum alerts retained in a snapshot.
pub const MAX_ALERTS: usize = 16;

/// Convert seconds to whole ticks.
pub fn secs_to_ticks(secs: f64) -> u64 {
    (secs * TICK_RATE as f64).round() as u64
}
