//! Merging of configuration layers.

use crate::config::schema::Config;

/// Merges configuration layers.
pub struct ConfigMerger;

impl ConfigMerger {
    /// Overlay `source` onto `target`. Fields set in `source` win; unset
    /// fields leave `target` untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use railres::config::{Config, ConfigMerger, ListFormat};
    ///
    /// let mut base = Config { show_count: Some(false), ..Default::default() };
    /// let overlay = Config { list_format: Some(ListFormat::Json), ..Default::default() };
    /// ConfigMerger::merge_into(&mut base, &overlay);
    ///
    /// assert_eq!(base.show_count, Some(false));
    /// assert_eq!(base.list_format, Some(ListFormat::Json));
    /// ```
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.special_bookings.is_some() {
            target.special_bookings = source.special_bookings;
        }
        if source.list_format.is_some() {
            target.list_format = source.list_format;
        }
        if source.show_count.is_some() {
            target.show_count = source.show_count;
        }
    }
}
