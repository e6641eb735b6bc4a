use crate::config::InteractionConfig;

/// Holds back installs until the document is parsed.
///
/// Before `DOMContentLoaded` a `configure` call only records its options; the
/// ready callback then installs whatever was requested last.
#[derive(Debug, Default)]
pub struct InstallGate {
    ready: bool,
    pending: Option<InteractionConfig>,
}

impl InstallGate {
    /// Returns the config to install right away, or `None` when it has to
    /// wait for the document.
    pub fn request(&mut self, config: InteractionConfig) -> Option<InteractionConfig> {
        if self.ready {
            Some(config)
        } else {
            self.pending = Some(config);
            None
        }
    }

    /// Marks the document ready and hands back the config to install first.
    pub fn open(&mut self) -> InteractionConfig {
        self.ready = true;
        self.pending.take().unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_offset(header_offset: f64) -> InteractionConfig {
        InteractionConfig {
            header_offset,
            ..InteractionConfig::default()
        }
    }

    #[test]
    fn configure_while_loading_waits_for_ready() {
        let mut gate = InstallGate::default();

        assert_eq!(gate.request(with_offset(64.0)), None);
        assert!(!gate.is_open());

        assert_eq!(gate.open().header_offset, 64.0);
        assert!(gate.is_open());
    }

    #[test]
    fn latest_options_before_ready_win() {
        let mut gate = InstallGate::default();
        gate.request(with_offset(64.0));
        gate.request(with_offset(48.0));

        assert_eq!(gate.open().header_offset, 48.0);
    }

    #[test]
    fn ready_without_configure_uses_defaults() {
        let mut gate = InstallGate::default();
        assert_eq!(gate.open(), InteractionConfig::default());
    }

    #[test]
    fn configure_after_ready_installs_immediately() {
        let mut gate = InstallGate::default();
        gate.open();

        let now = gate.request(with_offset(32.0));
        assert_eq!(now.map(|config| config.header_offset), Some(32.0));
    }
}
