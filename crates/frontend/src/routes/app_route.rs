/// The application's views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    FormBuilder,
    FormPreview,
}

impl AppRoute {
    pub fn all() -> [AppRoute; 3] {
        [AppRoute::Home, AppRoute::FormBuilder, AppRoute::FormPreview]
    }

    /// Path relative to the mount prefix
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::FormBuilder => "/form-builder",
            AppRoute::FormPreview => "/form-preview",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::FormBuilder => "FormBuilder",
            AppRoute::FormPreview => "FormPreview",
        }
    }

    /// Returns the display name for the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Home => "Главная",
            AppRoute::FormBuilder => "Конструктор",
            AppRoute::FormPreview => "Просмотр",
        }
    }

    /// Full browser path under the normalized mount prefix `base`.
    ///
    /// Links must carry the prefix themselves: `<A>` leaves absolute hrefs as is.
    pub fn href(&self, base: &str) -> String {
        format!("{}{}", base, self.path())
    }

    /// Resolve a browser path to a view.
    ///
    /// `base` is a normalized mount prefix ("" or "/generator"). A single
    /// trailing slash is ignored; anything outside the prefix is no match.
    pub fn resolve(base: &str, path: &str) -> Option<AppRoute> {
        let rest = path.strip_prefix(base)?;
        let rest = match rest {
            "" => "/",
            r if !r.starts_with('/') => return None,
            r if r.len() > 1 => r.strip_suffix('/').unwrap_or(r),
            r => r,
        };
        Self::all().into_iter().find(|route| route.path() == rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_mounted() {
        assert_eq!(AppRoute::resolve("", "/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::resolve("", "/form-builder"), Some(AppRoute::FormBuilder));
        assert_eq!(AppRoute::resolve("", "/form-preview/"), Some(AppRoute::FormPreview));
        assert_eq!(AppRoute::resolve("", "/generator/form-builder"), None);
        assert_eq!(AppRoute::resolve("", "/unknown"), None);
    }

    #[test]
    fn test_resolve_sub_path_mounted() {
        let base = "/generator";
        assert_eq!(AppRoute::resolve(base, "/generator"), Some(AppRoute::Home));
        assert_eq!(AppRoute::resolve(base, "/generator/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::resolve(base, "/generator/form-preview"), Some(AppRoute::FormPreview));
        assert_eq!(AppRoute::resolve(base, "/form-builder"), None);
        assert_eq!(AppRoute::resolve(base, "/generatorx/form-builder"), None);
    }

    #[test]
    fn test_every_route_resolves_under_prefix() {
        for base in ["", "/generator"] {
            for route in AppRoute::all() {
                assert_eq!(AppRoute::resolve(base, &route.href(base)), Some(route));
            }
        }
    }

    #[test]
    fn test_href_under_prefix() {
        assert_eq!(AppRoute::FormBuilder.href(""), "/form-builder");
        assert_eq!(AppRoute::FormBuilder.href("/generator"), "/generator/form-builder");
        assert_eq!(AppRoute::FormPreview.href("/generator"), "/generator/form-preview");
        assert_eq!(AppRoute::Home.href("/generator"), "/generator/");
        // a prefixed link never lands on the root-mounted table
        assert_eq!(AppRoute::resolve("", &AppRoute::FormBuilder.href("/generator")), None);
    }
}
