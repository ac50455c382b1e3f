//! Script / advanced settings

/// Allowed range for `update_interval` (minutes)
pub const UPDATE_INTERVAL_RANGE: (u32, u32) = (1, 1440);

/// Allowed range for `backup_interval` (hours)
pub const BACKUP_INTERVAL_RANGE: (u32, u32) = (1, 168);

/// Script and advanced options
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptConfig {
    /// Minutes between background refreshes
    pub update_interval: u32,
    pub debug_mode: bool,
    pub allow_experimental: bool,
    pub auto_backup: bool,
    /// Hours between backups; only editable while `auto_backup` is on,
    /// but kept as-is when it is switched off
    pub backup_interval: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            update_interval: 30,
            debug_mode: false,
            allow_experimental: false,
            auto_backup: true,
            backup_interval: 24,
        }
    }
}

/// Partial update for `ScriptConfig` (shallow merge)
#[derive(Debug, Clone, Default)]
pub struct ScriptUpdate {
    pub update_interval: Option<u32>,
    pub debug_mode: Option<bool>,
    pub allow_experimental: Option<bool>,
    pub auto_backup: Option<bool>,
    pub backup_interval: Option<u32>,
}

impl ScriptConfig {
    /// Merge the set fields of `update`, clamping numbers into range
    pub fn apply(&mut self, update: ScriptUpdate) {
        if let Some(v) = update.update_interval {
            self.update_interval = clamp(v, UPDATE_INTERVAL_RANGE);
        }
        if let Some(v) = update.debug_mode {
            self.debug_mode = v;
        }
        if let Some(v) = update.allow_experimental {
            self.allow_experimental = v;
        }
        if let Some(v) = update.auto_backup {
            self.auto_backup = v;
        }
        if let Some(v) = update.backup_interval {
            self.backup_interval = clamp(v, BACKUP_INTERVAL_RANGE);
        }
    }

    /// Whether the backup interval control is shown
    pub fn backup_interval_editable(&self) -> bool {
        self.auto_backup
    }
}

fn clamp(value: u32, (min, max): (u32, u32)) -> u32 {
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_shallow() {
        let mut script = ScriptConfig::default();
        script.apply(ScriptUpdate {
            debug_mode: Some(true),
            ..Default::default()
        });

        assert!(script.debug_mode);
        assert_eq!(script.update_interval, 30);
        assert_eq!(script.backup_interval, 24);
    }

    #[test]
    fn test_intervals_clamped() {
        let mut script = ScriptConfig::default();
        script.apply(ScriptUpdate {
            update_interval: Some(0),
            backup_interval: Some(500),
            ..Default::default()
        });
        assert_eq!(script.update_interval, 1);
        assert_eq!(script.backup_interval, 168);

        script.apply(ScriptUpdate {
            update_interval: Some(5000),
            ..Default::default()
        });
        assert_eq!(script.update_interval, 1440);
    }
}
