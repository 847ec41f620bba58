use std::fmt;

/// Number of columns the dashboard can hold
pub const MAX_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Monthly,
    Weekly5,
    Weekly7,
    Daily,
    SixMonth,
    Agenda,
    Ongoing,
    Notes,
    MiniCal,
}

/// Static catalog entry for a panel kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub min_width: f32,
    pub min_height: f32,
    pub default_column: usize,
    /// Flexible panels go wherever there is room; fixed ones always use `default_column`
    pub flexible: bool,
    /// Compact panels take their content height and never get a row handle
    pub compact: bool,
}

impl PanelKind {
    pub const ALL: [PanelKind; 9] = [
        PanelKind::Monthly,
        PanelKind::Weekly5,
        PanelKind::Weekly7,
        PanelKind::Daily,
        PanelKind::SixMonth,
        PanelKind::Agenda,
        PanelKind::Ongoing,
        PanelKind::Notes,
        PanelKind::MiniCal,
    ];

    pub fn spec(self) -> PanelSpec {
        match self {
            PanelKind::Monthly => PanelSpec {
                key: "monthly",
                label: "Monthly",
                min_width: 220.0,
                min_height: 200.0,
                default_column: 0,
                flexible: true,
                compact: false,
            },
            PanelKind::Weekly5 => PanelSpec {
                key: "weekly5",
                label: "Weekly (5)",
                min_width: 400.0,
                min_height: 200.0,
                default_column: 0,
                flexible: false,
                compact: false,
            },
            PanelKind::Weekly7 => PanelSpec {
                key: "weekly7",
                label: "Weekly (7)",
                min_width: 500.0,
                min_height: 200.0,
                default_column: 0,
                flexible: false,
                compact: false,
            },
            PanelKind::Daily => PanelSpec {
                key: "daily",
                label: "Daily",
                min_width: 260.0,
                min_height: 200.0,
                default_column: 0,
                flexible: true,
                compact: false,
            },
            PanelKind::SixMonth => PanelSpec {
                key: "sixmonth",
                label: "6 Months",
                min_width: 340.0,
                min_height: 200.0,
                default_column: 0,
                flexible: true,
                compact: false,
            },
            PanelKind::Agenda => PanelSpec {
                key: "agenda",
                label: "Agenda",
                min_width: 200.0,
                min_height: 200.0,
                default_column: 1,
                flexible: true,
                compact: false,
            },
            PanelKind::Ongoing => PanelSpec {
                key: "ongoing",
                label: "On-Going",
                min_width: 200.0,
                min_height: 200.0,
                default_column: 1,
                flexible: true,
                compact: false,
            },
            PanelKind::Notes => PanelSpec {
                key: "notes",
                label: "Notes",
                min_width: 200.0,
                min_height: 200.0,
                default_column: 1,
                flexible: true,
                compact: false,
            },
            PanelKind::MiniCal => PanelSpec {
                key: "mini-cal",
                label: "Mini Cal",
                min_width: 180.0,
                min_height: 10.0,
                default_column: 1,
                flexible: true,
                compact: true,
            },
        }
    }

    /// Look up a kind by its catalog key ("monthly", "mini-cal", ...)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.spec().key == key)
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn is_compact(self) -> bool {
        self.spec().compact
    }

    /// The other member of a mutually exclusive pair sharing one slot
    pub fn alternate(self) -> Option<Self> {
        match self {
            PanelKind::Weekly5 => Some(PanelKind::Weekly7),
            PanelKind::Weekly7 => Some(PanelKind::Weekly5),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub kind: PanelKind,
    pub label: String,
    /// Column index 0..MAX_COLUMNS
    pub col: usize,
}

impl Panel {
    pub fn new(id: PanelId, kind: PanelKind, col: usize) -> Self {
        Self {
            id,
            kind,
            label: kind.label().to_string(),
            col: col.min(MAX_COLUMNS - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_catalog() {
        for kind in PanelKind::ALL {
            assert_eq!(PanelKind::from_key(kind.spec().key), Some(kind));
        }
        assert_eq!(PanelKind::from_key("kanban"), None);
    }

    #[test]
    fn only_week_views_are_alternates() {
        assert_eq!(PanelKind::Weekly5.alternate(), Some(PanelKind::Weekly7));
        assert_eq!(PanelKind::Weekly7.alternate(), Some(PanelKind::Weekly5));
        assert!(PanelKind::ALL
            .iter()
            .filter(|k| !matches!(k, PanelKind::Weekly5 | PanelKind::Weekly7))
            .all(|k| k.alternate().is_none()));
    }

    #[test]
    fn mini_cal_is_the_only_compact_panel() {
        let compact: Vec<_> = PanelKind::ALL.into_iter().filter(|k| k.is_compact()).collect();
        assert_eq!(compact, vec![PanelKind::MiniCal]);
    }

    #[test]
    fn panel_column_is_clamped() {
        let panel = Panel::new(PanelId(1), PanelKind::Notes, 7);
        assert_eq!(panel.col, 2);
        assert_eq!(panel.label, "Notes");
    }
}
