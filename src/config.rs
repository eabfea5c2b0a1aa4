//! Runtime configuration of the bridge.

/// How the receive path treats a radio that runs dry in the middle of a frame.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ReceiveMode {
    /// Spin until the rest of the frame arrives.
    #[default]
    Blocking,
    /// Return to the polling loop and continue the frame on the next poll.
    Resumable,
}

/// What happens to the payload of the word that closes a received frame.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TerminatorPolicy {
    /// Forward it to the terminal like every other byte.
    #[default]
    Keep,
    /// Drop it.
    Discard,
}

/// What the polling loop does between two iterations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Idle {
    /// Emit a spin-loop hint and poll again.
    #[default]
    Spin,
    /// Yield the current thread to the OS scheduler.
    Yield,
}

impl Idle {
    /// Performs the idle action once.
    pub fn wait(self) {
        match self {
            Self::Spin => std::hint::spin_loop(),
            Self::Yield => std::thread::yield_now(),
        }
    }
}

/// Bridge configuration.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Config {
    receive_mode: ReceiveMode,
    terminator_policy: TerminatorPolicy,
    idle: Idle,
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            receive_mode: ReceiveMode::Blocking,
            terminator_policy: TerminatorPolicy::Keep,
            idle: Idle::Spin,
        }
    }

    /// Sets the receive mode.
    #[must_use]
    pub const fn with_receive_mode(mut self, receive_mode: ReceiveMode) -> Self {
        self.receive_mode = receive_mode;
        self
    }

    /// Sets the terminator policy.
    #[must_use]
    pub const fn with_terminator_policy(mut self, terminator_policy: TerminatorPolicy) -> Self {
        self.terminator_policy = terminator_policy;
        self
    }

    /// Sets the idle action.
    #[must_use]
    pub const fn with_idle(mut self, idle: Idle) -> Self {
        self.idle = idle;
        self
    }

    /// Returns the receive mode.
    #[must_use]
    pub const fn receive_mode(&self) -> ReceiveMode {
        self.receive_mode
    }

    /// Returns the terminator policy.
    #[must_use]
    pub const fn terminator_policy(&self) -> TerminatorPolicy {
        self.terminator_policy
    }

    /// Returns the idle action.
    #[must_use]
    pub const fn idle(&self) -> Idle {
        self.idle
    }
}
