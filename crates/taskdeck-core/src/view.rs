use taskdeck_model::{PageRequest, PageView, Task, TaskFilter};

/// Project the full list onto one visible page.
///
/// Status filter, then search filter, then pagination. The page is taken
/// as given: a page beyond the filtered range yields an empty slice with no
/// auto-correction.
pub fn derive(tasks: &[Task], filter: &TaskFilter, page: &PageRequest) -> PageView {
    let filtered: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    let total = filtered.len();
    let total_pages = total.div_ceil(page.per_page);

    let items = filtered
        .into_iter()
        .skip(page.offset())
        .take(page.per_page)
        .cloned()
        .collect();

    PageView {
        items,
        total,
        total_pages,
    }
}
