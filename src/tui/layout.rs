/// Responsive breakpoints for the form shell.
///
/// Width thresholds live here so render code never compares raw column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: phase and findings only
    Compact,
    /// 60-99 cols: adds key hints
    Normal,
    /// 100+ cols: adds uptime and the latest log line
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Columns the form column may occupy at this width
    pub fn form_width(&self, available: u16) -> u16 {
        match self {
            Breakpoint::Compact => available,
            Breakpoint::Normal => available.min(72),
            Breakpoint::Wide => available.min(88),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(220), Breakpoint::Wide);
    }

    #[test]
    fn at_least_is_inclusive() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn form_width_is_capped_on_wide_terminals() {
        assert_eq!(Breakpoint::Compact.form_width(50), 50);
        assert_eq!(Breakpoint::Normal.form_width(90), 72);
        assert_eq!(Breakpoint::Wide.form_width(200), 88);
        assert_eq!(Breakpoint::Wide.form_width(80), 80);
    }
}
