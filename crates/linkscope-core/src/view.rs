//! Result view model: filter, sort, paginate and select.
//!
//! Every function here is pure. Pages derive a [`ResultView`] from the raw
//! list and the client-local [`ViewState`] on each render; nothing is cached.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use linkscope_api_models::UrlResult;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Selected result identifiers.
pub type Selection = BTreeSet<u64>;

/// Column a result list can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Backend identifier.
    Id,
    /// Page title.
    Title,
    /// Submitted URL.
    Link,
    /// Analysis status, by wire name.
    Status,
    /// Detected HTML version.
    HtmlVersion,
    /// Internal link count.
    InternalLinks,
    /// External link count.
    ExternalLinks,
    /// Broken link count.
    BrokenLinks,
    /// Login form presence.
    HasLoginForm,
    /// Creation timestamp.
    CreatedAt,
}

impl SortKey {
    /// Every key in column order.
    pub const ALL: [Self; 10] = [
        Self::Id,
        Self::Title,
        Self::Link,
        Self::Status,
        Self::HtmlVersion,
        Self::InternalLinks,
        Self::ExternalLinks,
        Self::BrokenLinks,
        Self::HasLoginForm,
        Self::CreatedAt,
    ];

    /// Stable machine name, accepted back by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Link => "link",
            Self::Status => "status",
            Self::HtmlVersion => "html_version",
            Self::InternalLinks => "internal_links",
            Self::ExternalLinks => "external_links",
            Self::BrokenLinks => "broken_links",
            Self::HasLoginForm => "has_login_form",
            Self::CreatedAt => "created_at",
        }
    }

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Link => "URL",
            Self::Status => "Status",
            Self::HtmlVersion => "HTML",
            Self::InternalLinks => "Internal",
            Self::ExternalLinks => "External",
            Self::BrokenLinks => "Broken",
            Self::HasLoginForm => "Login",
            Self::CreatedAt => "Created",
        }
    }

    /// Ascending comparison of two rows on this key.
    #[must_use]
    pub fn compare(self, left: &UrlResult, right: &UrlResult) -> Ordering {
        match self {
            Self::Id => left.id.cmp(&right.id),
            Self::Title => locale_compare(&left.title, &right.title),
            Self::Link => locale_compare(&left.link, &right.link),
            Self::Status => locale_compare(left.status.as_str(), right.status.as_str()),
            Self::HtmlVersion => locale_compare(&left.html_version, &right.html_version),
            Self::InternalLinks => left.internal_links.cmp(&right.internal_links),
            Self::ExternalLinks => left.external_links.cmp(&right.external_links),
            Self::BrokenLinks => left.broken_links.cmp(&right.broken_links),
            Self::HasLoginForm => left.has_login_form.cmp(&right.has_login_form),
            Self::CreatedAt => locale_compare(&left.created_at, &right.created_at),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when a sort key name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "url" => Ok(Self::Link),
            "html" => Ok(Self::HtmlVersion),
            "internal" => Ok(Self::InternalLinks),
            "external" => Ok(Self::ExternalLinks),
            "broken" => Ok(Self::BrokenLinks),
            "login" => Ok(Self::HasLoginForm),
            other => Self::ALL
                .into_iter()
                .find(|key| key.as_str() == other)
                .ok_or_else(|| UnknownSortKey(value.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow glyph for column headers.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Client-local view settings. Never sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// Case-insensitive substring matched against each row's link.
    pub search: String,
    /// Active sort key; `None` keeps server order.
    pub sort: Option<SortKey>,
    /// Direction applied to the active sort key.
    pub direction: SortDirection,
    /// Requested page, 1-based. Clamped on every derivation.
    pub page: usize,
    /// Selected identifiers, independent of filter and page.
    pub selected: Selection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            direction: SortDirection::Ascending,
            page: 1,
            selected: Selection::new(),
        }
    }
}

impl ViewState {
    /// Replace the search term and return to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Header click: flip the active key, or switch to a new key ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        match self.sort {
            Some(active) if active == key => {
                self.direction = self.direction.flipped();
            }
            _ => {
                self.sort = Some(key);
                self.direction = SortDirection::Ascending;
            }
        }
    }

    /// Request a page; values below 1 become 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Add or remove one identifier from the selection.
    pub fn toggle(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select exactly the filtered rows, or clear the selection.
    pub fn toggle_all(&mut self, rows: &[UrlResult], checked: bool) {
        self.selected = if checked {
            filter_rows(rows, &self.search)
                .into_iter()
                .map(|row| row.id)
                .collect()
        } else {
            Selection::new()
        };
    }

    /// Drop selected identifiers that no longer exist in `rows`.
    pub fn prune_selection(&mut self, rows: &[UrlResult]) {
        let present: BTreeSet<u64> = rows.iter().map(|row| row.id).collect();
        self.selected.retain(|id| present.contains(id));
    }

    /// Selected identifiers in ascending order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<u64> {
        self.selected.iter().copied().collect()
    }
}

/// Rows and flags for one rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    /// Rows on the effective page, in display order.
    pub rows: Vec<UrlResult>,
    /// Rows matching the search across all pages.
    pub filtered_count: usize,
    /// Page count, never below 1.
    pub total_pages: usize,
    /// Page actually shown after clamping.
    pub page: usize,
    /// Whether the selection equals the filtered set.
    pub all_selected: bool,
    /// Number of selected identifiers.
    pub selected_count: usize,
    /// Whether bulk actions apply (selection non-empty).
    pub bulk_enabled: bool,
}

/// Derive the visible page from the raw list.
#[must_use]
pub fn derive(rows: &[UrlResult], state: &ViewState) -> ResultView {
    let mut filtered = filter_rows(rows, &state.search);
    sort_rows(&mut filtered, state.sort, state.direction);

    let total_pages = total_pages(filtered.len());
    let page = clamp_page(state.page, total_pages);
    let all_selected = filtered.len() == state.selected.len()
        && filtered.iter().all(|row| state.selected.contains(&row.id));

    ResultView {
        rows: page_slice(&filtered, page)
            .iter()
            .map(|row| (*row).clone())
            .collect(),
        filtered_count: filtered.len(),
        total_pages,
        page,
        all_selected,
        selected_count: state.selected.len(),
        bulk_enabled: !state.selected.is_empty(),
    }
}

/// Rows whose link contains `search`, ignoring case, in original order.
#[must_use]
pub fn filter_rows<'a>(rows: &'a [UrlResult], search: &str) -> Vec<&'a UrlResult> {
    if search.is_empty() {
        return rows.iter().collect();
    }
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| row.link.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by `key`; `None` leaves the order untouched.
pub fn sort_rows(rows: &mut [&UrlResult], key: Option<SortKey>, direction: SortDirection) {
    let Some(key) = key else {
        return;
    };
    rows.sort_by(|left, right| {
        let ordering = key.compare(left, right);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// `max(1, ceil(len / PAGE_SIZE))`.
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    if len == 0 { 1 } else { len.div_ceil(PAGE_SIZE) }
}

/// Clamp a requested page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)`; out of range yields nothing.
#[must_use]
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(PAGE_SIZE))
    else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// Collation used for text columns.
///
/// Compares case-insensitively first, then puts lowercase before uppercase at
/// the first differing character. The empty string sorts first.
#[must_use]
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    let folded = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));
    folded.then_with(|| {
        left.chars()
            .zip(right.chars())
            .find(|(l, r)| l != r)
            .map_or_else(
                || left.len().cmp(&right.len()),
                |(l, r)| {
                    r.is_lowercase()
                        .cmp(&l.is_lowercase())
                        .then_with(|| l.cmp(&r))
                },
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkscope_api_models::UrlStatus;

    fn row(id: u64, link: &str) -> UrlResult {
        UrlResult {
            id,
            link: link.to_string(),
            title: String::new(),
            html_version: String::new(),
            internal_links: 0,
            external_links: 0,
            broken_links: 0,
            has_login_form: false,
            status: UrlStatus::Queued,
            created_at: String::new(),
        }
    }

    fn numbered(count: u64) -> Vec<UrlResult> {
        (1..=count)
            .map(|id| row(id, &format!("http://site{id}.test")))
            .collect()
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let rows = numbered(3);
        let ids: Vec<u64> = filter_rows(&rows, "").iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_on_link_only() {
        let mut rows = vec![row(1, "http://Example.com"), row(2, "http://other.test")];
        rows[1].title = "example".to_string();
        let ids: Vec<u64> = filter_rows(&rows, "EXAMPLE")
            .iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn twelve_rows_split_ten_and_two() {
        let rows = numbered(12);
        let mut state = ViewState::default();
        let first = derive(&rows, &state);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.rows.len(), 10);
        state.set_page(2);
        let second = derive(&rows, &state);
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.rows[0].id, 11);
    }

    #[test]
    fn empty_list_has_one_page() {
        let view = derive(&[], &ViewState::default());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.rows.is_empty());
        assert!(view.all_selected);
        assert!(!view.bulk_enabled);
    }

    #[test]
    fn page_past_the_end_is_clamped() {
        let rows = numbered(25);
        let state = ViewState {
            page: 9,
            ..ViewState::default()
        };
        let view = derive(&rows, &state);
        assert_eq!(view.page, 3);
        assert_eq!(view.rows.len(), 5);
        assert!(page_slice(&rows, 9).is_empty());
        assert!(page_slice(&rows, 0).is_empty());
    }

    #[test]
    fn search_change_resets_page() {
        let mut state = ViewState {
            page: 3,
            ..ViewState::default()
        };
        state.set_search("site1");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn toggle_sort_flips_then_switches() {
        let mut state = ViewState::default();
        state.toggle_sort(SortKey::Title);
        assert_eq!(state.sort, Some(SortKey::Title));
        assert_eq!(state.direction, SortDirection::Ascending);
        state.toggle_sort(SortKey::Title);
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle_sort(SortKey::Status);
        assert_eq!(state.sort, Some(SortKey::Status));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn numeric_and_boolean_keys_compare_by_value() {
        let mut low = row(1, "a");
        let mut high = row(2, "b");
        low.internal_links = 9;
        high.internal_links = 10;
        high.has_login_form = true;
        assert_eq!(
            SortKey::InternalLinks.compare(&low, &high),
            Ordering::Less
        );
        assert_eq!(SortKey::HasLoginForm.compare(&low, &high), Ordering::Less);
    }

    #[test]
    fn descending_keeps_ties_in_filtered_order() {
        let mut rows = numbered(4);
        rows[0].title = "b".to_string();
        rows[1].title = "a".to_string();
        rows[2].title = "b".to_string();
        rows[3].title = "a".to_string();
        let mut refs: Vec<&UrlResult> = rows.iter().collect();
        sort_rows(&mut refs, Some(SortKey::Title), SortDirection::Descending);
        let ids: Vec<u64> = refs.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn locale_collation_orders_case_and_empty() {
        assert_eq!(locale_compare("", "a"), Ordering::Less);
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Abc", "abd"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn status_sorts_by_wire_name() {
        let mut done = row(1, "a");
        done.status = UrlStatus::Done;
        let mut running = row(2, "b");
        running.status = UrlStatus::Running;
        assert_eq!(SortKey::Status.compare(&done, &running), Ordering::Less);
    }

    #[test]
    fn toggle_all_selects_filtered_set_only() {
        let rows = vec![row(1, "http://keep.test"), row(2, "http://drop.test")];
        let mut state = ViewState::default();
        state.set_search("keep");
        state.toggle_all(&rows, true);
        assert_eq!(state.selected_ids(), vec![1]);
        assert!(derive(&rows, &state).all_selected);

        state.toggle(2);
        let view = derive(&rows, &state);
        assert!(!view.all_selected);
        assert_eq!(view.selected_count, 2);

        state.toggle_all(&rows, false);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn selection_survives_filtering_but_not_removal() {
        let rows = numbered(3);
        let mut state = ViewState::default();
        state.toggle(1);
        state.toggle(3);
        state.set_search("site2");
        assert_eq!(derive(&rows, &state).selected_count, 2);

        state.prune_selection(&rows[..2]);
        assert_eq!(state.selected_ids(), vec![1]);
    }

    #[test]
    fn sort_keys_parse_from_names_and_aliases() {
        assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
        assert_eq!("broken-links".parse::<SortKey>(), Ok(SortKey::BrokenLinks));
        assert_eq!("URL".parse::<SortKey>(), Ok(SortKey::Link));
        assert!("colour".parse::<SortKey>().is_err());
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
    }
}
