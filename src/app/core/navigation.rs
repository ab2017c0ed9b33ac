use super::sections::active_section;
use super::*;

impl App {
    /// Install a freshly computed page layout (after startup or a resize)
    /// and re-derive everything that depends on it.
    pub fn set_layout(
        &mut self,
        section_tops: Vec<(SectionId, u32)>,
        content_height: u32,
        viewport_height: u32,
    ) {
        self.scroll.section_tops = section_tops;
        self.scroll.content_height = content_height;
        self.scroll.viewport_height = viewport_height;
        let max = self.scroll.max_offset();
        self.scroll.offset = self.scroll.offset.min(max);
        if let Some(t) = self.scroll.target.as_mut() {
            *t = (*t).min(max);
        }
        self.recompute_active();
    }

    /// Re-derive the highlighted section from the scroll offset.
    pub fn recompute_active(&mut self) {
        let next = active_section(self.scroll.offset, &self.scroll.section_tops, self.header_offset);
        if next != self.active {
            tracing::trace!(from = %self.active, to = %next, "active section changed");
            self.active = next;
        }
    }

    fn set_offset(&mut self, offset: u32) {
        self.scroll.offset = offset.min(self.scroll.max_offset());
        self.recompute_active();
    }

    /// Scroll directly by `delta` rows; cancels any smooth scroll.
    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll.target = None;
        let cur = i64::from(self.scroll.offset);
        let next = (cur + delta).max(0);
        self.set_offset(u32::try_from(next).unwrap_or(u32::MAX));
    }

    pub fn page_down(&mut self) {
        let page = i64::from(self.scroll.viewport_height.saturating_sub(1).max(1));
        self.scroll_by(page);
    }

    pub fn page_up(&mut self) {
        let page = i64::from(self.scroll.viewport_height.saturating_sub(1).max(1));
        self.scroll_by(-page);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.target = None;
        self.set_offset(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.target = None;
        self.set_offset(self.scroll.max_offset());
    }

    /// Smooth-scroll to `section` and close the navigation drawer. The active
    /// section is not forced; the tracker catches up as the scroll settles.
    pub fn navigate_to(&mut self, section: SectionId) {
        self.menu.open = false;
        if let Some(top) = self.scroll.top_of(section) {
            let target = top.min(self.scroll.max_offset());
            tracing::debug!(section = %section, target, "navigating");
            self.scroll.target = (target != self.scroll.offset).then_some(target);
        }
    }

    pub fn next_section(&mut self) {
        if let Some(s) = SectionId::from_index(self.active.index() + 1) {
            self.navigate_to(s);
        }
    }

    pub fn prev_section(&mut self) {
        // From inside a section, go to its own top first.
        let here = self.scroll.top_of(self.active).unwrap_or(0);
        if self.scroll.offset > here {
            self.navigate_to(self.active);
        } else if let Some(i) = self.active.index().checked_sub(1) {
            if let Some(s) = SectionId::from_index(i) {
                self.navigate_to(s);
            }
        }
    }

    /// Move one smooth-scroll step toward the target. Returns `true` if the
    /// offset changed.
    pub fn step_smooth_scroll(&mut self) -> bool {
        let Some(target) = self.scroll.target else {
            return false;
        };
        let cur = self.scroll.offset;
        let dist = cur.abs_diff(target);
        let step = (dist / 4).max(1);
        let next = if target > cur { cur + step } else { cur - step };
        self.set_offset(next);
        if self.scroll.offset == target || self.scroll.offset == cur {
            self.scroll.target = None;
        }
        self.scroll.offset != cur
    }

    /// Open/close the navigation drawer (a plain flip). Opening puts the
    /// cursor on the active section.
    pub fn toggle_menu(&mut self) {
        self.menu.open = !self.menu.open;
        if self.menu.open {
            self.menu.cursor = self.active.index();
        }
    }

    pub fn menu_down(&mut self) {
        self.menu.cursor = (self.menu.cursor + 1) % SectionId::ALL.len();
    }

    pub fn menu_up(&mut self) {
        self.menu.cursor = self
            .menu
            .cursor
            .checked_sub(1)
            .unwrap_or(SectionId::ALL.len() - 1);
    }

    /// Navigate to the drawer's highlighted entry (closes the drawer).
    pub fn menu_activate(&mut self) {
        if let Some(s) = SectionId::from_index(self.menu.cursor) {
            self.navigate_to(s);
        }
    }
}
