pub mod store;

pub use store::StyleStore;

/// Closed set of calendar skins. Adding a variant means adding a view under
/// `views::calendar` and an arm in the dispatch shell; nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
  GridMonth,
  WeeklyGrid,
  Timeline,
  Bento,
  Subway,
}

/// Which data shape a skin consumes. The two legacy shapes exist for the
/// decorative skins that were written against older event conventions; the
/// conversion happens once at the dispatch boundary, never inside binning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
  Common,
  LegacyStamps,
  LegacySplitDates,
}

impl StyleId {
  pub const DEFAULT: Self = Self::GridMonth;

  pub const ALL: [Self; 5] = [
    Self::GridMonth,
    Self::WeeklyGrid,
    Self::Timeline,
    Self::Bento,
    Self::Subway,
  ];

  /// Wire id, the exact string persisted to disk.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::GridMonth => "grid-month",
      Self::WeeklyGrid => "weekly-grid",
      Self::Timeline => "timeline",
      Self::Bento => "bento",
      Self::Subway => "subway",
    }
  }

  pub fn parse(raw: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|id| id.as_str() == raw)
  }

  pub const fn label(self) -> &'static str {
    match self {
      Self::GridMonth => "Month grid",
      Self::WeeklyGrid => "Weekly grid",
      Self::Timeline => "Timeline",
      Self::Bento => "Bento box",
      Self::Subway => "Subway map",
    }
  }

  pub const fn shape(self) -> EventShape {
    match self {
      Self::GridMonth | Self::WeeklyGrid | Self::Timeline => EventShape::Common,
      Self::Bento => EventShape::LegacyStamps,
      Self::Subway => EventShape::LegacySplitDates,
    }
  }
}

impl core::fmt::Display for StyleId {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

pub fn is_valid_style(raw: &str) -> bool {
  StyleId::parse(raw).is_some()
}

/// Total over any input: unknown ids (stale persisted values, ids from newer
/// app versions) coerce to the default skin.
pub fn resolve_style(raw: &str) -> StyleId {
  StyleId::parse(raw).unwrap_or_else(|| {
    log::debug!("Unknown style id {raw:?}, falling back to {}", StyleId::DEFAULT);
    StyleId::DEFAULT
  })
}
