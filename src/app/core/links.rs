use super::*;
use std::path::Path;

/// Outbound destinations reachable from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    GitHub,
    LinkedIn,
    Email,
    Resume,
    /// "View Code" link of the n-th project.
    Project(usize),
}

impl App {
    /// Resolve `target` to a URL or path from the content, if configured.
    pub fn link_for(&self, target: LinkTarget) -> Option<String> {
        let c = &self.content;
        match target {
            LinkTarget::GitHub => c.socials.github.clone(),
            LinkTarget::LinkedIn => c.socials.linkedin.clone(),
            LinkTarget::Email => c.socials.email.clone(),
            LinkTarget::Resume => c.profile.resume.as_deref().map(|r| self.resolve_resource(r)),
            LinkTarget::Project(i) => c.projects.get(i).and_then(|p| p.link.clone()),
        }
    }

    /// URLs pass through; file paths are anchored at the content's base
    /// directory when relative.
    fn resolve_resource(&self, value: &str) -> String {
        if is_url(value) {
            return value.to_string();
        }
        let path = Path::new(value);
        match &self.content.base_dir {
            Some(base) if path.is_relative() => base.join(path).display().to_string(),
            _ => value.to_string(),
        }
    }

    /// Hand the link to the system opener and report the outcome on the
    /// status line. Local files must exist before the opener is called.
    pub fn open_link(&mut self, target: LinkTarget, now: Instant) {
        let Some(url) = self.link_for(target) else {
            self.set_status(format!("No link configured for {:?}", target), now);
            return;
        };
        if !is_url(&url) && !Path::new(&url).exists() {
            tracing::warn!(path = %url, "linked file not found");
            self.set_status(format!("File not found: {}", url), now);
            return;
        }
        match (self.opener)(&url) {
            Ok(()) => {
                tracing::info!(url = %url, "opened link");
                self.set_status(format!("Opened {}", url), now);
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to open link");
                self.set_status(format!("Could not open {}: {}", url, e), now);
            }
        }
    }
}

fn is_url(value: &str) -> bool {
    value.contains("://") || value.starts_with("mailto:")
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_app() -> (App, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&seen);
        let a = app().with_link_opener(Box::new(move |u| {
            sink.borrow_mut().push(u.to_string());
            Ok(())
        }));
        (a, seen)
    }

    #[test]
    fn opener_receives_configured_url() {
        let (mut a, seen) = recording_app();
        a.open_link(LinkTarget::GitHub, Instant::now());
        assert_eq!(*seen.borrow(), vec!["https://github.com/sangamsingh18".to_string()]);
        assert_eq!(a.status_text(), Some("Opened https://github.com/sangamsingh18"));
    }

    #[test]
    fn resume_resolves_against_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("resume.pdf");
        std::fs::write(&pdf, b"%PDF").unwrap();

        let (mut a, seen) = recording_app();
        a.content.base_dir = Some(dir.path().to_path_buf());
        a.open_link(LinkTarget::Resume, Instant::now());
        assert_eq!(*seen.borrow(), vec![pdf.display().to_string()]);
    }

    #[test]
    fn missing_resume_file_skips_opener() {
        let dir = tempfile::tempdir().unwrap();
        let (mut a, seen) = recording_app();
        a.content.base_dir = Some(dir.path().to_path_buf());
        a.open_link(LinkTarget::Resume, Instant::now());
        assert!(seen.borrow().is_empty());
        assert!(a.status_text().unwrap_or_default().starts_with("File not found"));
    }

    #[test]
    fn remote_resume_is_not_checked_on_disk() {
        let (mut a, seen) = recording_app();
        a.content.profile.resume = Some("https://example.org/cv.pdf".to_string());
        a.open_link(LinkTarget::Resume, Instant::now());
        assert_eq!(*seen.borrow(), vec!["https://example.org/cv.pdf".to_string()]);
    }

    #[test]
    fn opener_failure_is_reported() {
        let mut a = app().with_link_opener(Box::new(|_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        }));
        a.open_link(LinkTarget::Email, Instant::now());
        assert!(a.status_text().unwrap_or_default().contains("no browser"));
    }

    #[test]
    fn missing_project_has_no_link() {
        let mut a = app();
        assert_eq!(a.link_for(LinkTarget::Project(99)), None);
        a.open_link(LinkTarget::Project(99), Instant::now());
        assert!(a.status_text().unwrap_or_default().starts_with("No link"));
    }
}
