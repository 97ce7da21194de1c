//! Message types for the application (TEA pattern)

use std::collections::BTreeMap;

use pdeck_client::{InjectStats, StatusSnapshot};

use crate::input_key::InputKey;
use crate::panel::PanelId;

/// All possible messages/actions in the application
///
/// Background results carry errors as display strings; the original error
/// kind has already been decided by the client by then.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the front end
    Key(InputKey),

    /// Periodic UI tick (redraw)
    Tick,

    /// Process-wide reconciliation tick
    PollTick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Operator Actions
    // ─────────────────────────────────────────────────────────
    /// Start a run of `profile_id` on `panel`
    RequestStart { panel: PanelId, profile_id: String },

    /// Inject the configured script into the panel's profile
    RequestInject { panel: PanelId },

    /// Empty the panel's log
    ClearLog { panel: PanelId },

    /// Ask the backend for every profile it tracks
    RequestRemoteList,

    SelectPanel(PanelId),
    NextPanel,
    PreviousPanel,

    /// Close the blocking alert
    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Profile ID Prompt
    // ─────────────────────────────────────────────────────────
    /// Open the prompt for the selected panel
    OpenProfileInput,
    ProfileInputChar(char),
    ProfileInputBackspace,
    SubmitProfileInput,
    CancelProfileInput,

    // ─────────────────────────────────────────────────────────
    // Start / Inject Results
    // ─────────────────────────────────────────────────────────
    StartCompleted {
        panel: PanelId,
        profile_id: String,
        message: String,
    },

    StartFailed {
        panel: PanelId,
        profile_id: String,
        error: String,
    },

    InjectCompleted {
        panel: PanelId,
        profile_id: String,
        stats: InjectStats,
    },

    InjectFailed {
        panel: PanelId,
        profile_id: String,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Poll Results
    // ─────────────────────────────────────────────────────────
    StatusPolled {
        panel: PanelId,
        run: u64,
        profile_id: String,
        snapshot: StatusSnapshot,
    },

    /// The backend does not know the profile (yet)
    StatusNotFound {
        panel: PanelId,
        run: u64,
        profile_id: String,
    },

    StatusPollFailed {
        panel: PanelId,
        run: u64,
        profile_id: String,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Remote Listing Results
    // ─────────────────────────────────────────────────────────
    RemoteProfilesListed {
        profiles: BTreeMap<String, StatusSnapshot>,
    },

    RemoteListFailed { error: String },
}
