use leptos::*;

pub const PAGE_SIZE: usize = 10;

/// One page of a client-side list. `page` is 1-based and clamped into range.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T> Paged<T> {
    /// `(first, last, total)` item positions shown on this page, 1-based.
    pub fn bounds(&self) -> (usize, usize, usize) {
        if self.total == 0 {
            return (0, 0, 0);
        }
        let start = (self.page - 1) * self.per_page + 1;
        (start, start + self.items.len() - 1, self.total)
    }
}

pub fn total_pages(total: usize, per_page: usize) -> usize {
    if total == 0 || per_page == 0 {
        1
    } else {
        total.div_ceil(per_page)
    }
}

pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Paged<T> {
    let total = items.len();
    let total_pages = total_pages(total, per_page);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let items = items.iter().skip(start).take(per_page).cloned().collect();
    Paged {
        items,
        page,
        per_page,
        total_pages,
        total,
    }
}

fn bounds_message(bounds: (usize, usize, usize)) -> String {
    match bounds {
        (_, _, 0) => "No entries".to_string(),
        (start, end, total) => format!("Showing {}-{} of {}", start, end, total),
    }
}

/// Previous/next controls. `current` is the clamped page actually shown;
/// `page` is the requested page the buttons write to.
#[component]
pub fn Pager(
    #[prop(into)] bounds: Signal<(usize, usize, usize)>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] current: Signal<usize>,
    page: RwSignal<usize>,
) -> impl IntoView {
    let can_go_prev = move || current.get() > 1;
    let can_go_next = move || current.get() < total_pages.get();
    view! {
        <div class="flex items-center justify-between rounded-lg border border-border p-3 text-sm text-fg">
            <div>{move || bounds_message(bounds.get())}</div>
            <div class="inline-flex items-center gap-2">
                <button
                    class="px-3 py-1 rounded border border-border text-fg disabled:opacity-50"
                    disabled=move || !can_go_prev()
                    on:click=move |_| page.set(current.get_untracked().saturating_sub(1).max(1))
                >
                    {"Previous"}
                </button>
                <span class="text-xs text-fg-muted">
                    {move || page_label(current.get(), total_pages.get())}
                </span>
                <button
                    class="px-3 py-1 rounded border border-border text-fg disabled:opacity-50"
                    disabled=move || !can_go_next()
                    on:click=move |_| page.set(current.get_untracked() + 1)
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

fn page_label(current: usize, total_pages: usize) -> String {
    format!("Page {} of {}", current.min(total_pages.max(1)), total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn paginate_clamps_page_into_range() {
        let items: Vec<u32> = (1..=23).collect();
        let last = paginate(&items, 9, PAGE_SIZE);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!(last.bounds(), (21, 23, 23));

        let first = paginate(&items, 0, PAGE_SIZE);
        assert_eq!(first.page, 1);
        assert_eq!(first.items.len(), 10);
    }

    #[test]
    fn empty_list_reports_no_entries() {
        let page = paginate::<u32>(&[], 1, PAGE_SIZE);
        assert_eq!(page.bounds(), (0, 0, 0));
        assert_eq!(bounds_message(page.bounds()), "No entries");
    }

    #[test]
    fn page_label_never_exceeds_total() {
        assert_eq!(page_label(2, 3), "Page 2 of 3");
        assert_eq!(page_label(4, 2), "Page 2 of 2");
    }
}
