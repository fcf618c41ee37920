//! Theme management module for the application.
//!
//! Provides a context-based appearance system (light, dark, follow the OS).
//! The preference is persisted in localStorage under `appearance`.

pub mod appearance;
pub mod browser;

use leptos::prelude::*;

pub use appearance::{Appearance, AppearanceStore, ResolvedTheme};
use browser::{apply_theme, watch_color_scheme, LocalStorage, MediaQuery};

pub type BrowserAppearanceStore = AppearanceStore<LocalStorage, MediaQuery>;

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current preference signal.
    pub appearance: RwSignal<Appearance>,
    /// OS colour scheme, kept current by the media-query listener.
    pub prefers_dark: RwSignal<bool>,
    store: BrowserAppearanceStore,
}

impl ThemeContext {
    /// Set the preference, persist it and repaint.
    pub fn set_appearance(&self, appearance: Appearance) {
        self.appearance.set(appearance);
        self.store.save(appearance);
        apply_theme(appearance.resolve(self.prefers_dark.get_untracked()));
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.appearance.get().resolve(self.prefers_dark.get())
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let store = BrowserAppearanceStore::new(LocalStorage, MediaQuery);
    let initial = store.load();
    let appearance = RwSignal::new(initial);
    let prefers_dark = RwSignal::new(store.prefers_dark());

    apply_theme(initial.resolve(prefers_dark.get_untracked()));

    watch_color_scheme(move || {
        let dark = store.prefers_dark();
        prefers_dark.set(dark);
        // only repaint while following the OS
        let current = appearance.get_untracked();
        if current == Appearance::System {
            apply_theme(current.resolve(dark));
        }
    });

    provide_context(ThemeContext {
        appearance,
        prefers_dark,
        store,
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Theme selector dropdown component.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let select = move |appearance: Appearance| {
        ctx.set_appearance(appearance);
        set_dropdown_open.set(false);
    };

    view! {
        <div class="theme-selector" style="position: relative;">
            <button
                class="top-header-icon-btn"
                on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                title="Tampilan"
            >
                {move || {
                    let name = if ctx.resolved().is_dark() { "moon" } else { "sun" };
                    crate::shared::icons::icon(name)
                }}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-dropdown">
                    {Appearance::all().into_iter().map(|appearance| {
                        let is_active = move || ctx.appearance.get() == appearance;
                        view! {
                            <button
                                class=move || if is_active() { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                                on:click=move |_| select(appearance)
                            >
                                {appearance.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_tracks_os_scheme_in_system_mode() {
        let ctx = ThemeContext {
            appearance: RwSignal::new(Appearance::System),
            prefers_dark: RwSignal::new(false),
            store: BrowserAppearanceStore::new(LocalStorage, MediaQuery),
        };
        assert_eq!(ctx.resolved(), ResolvedTheme::Light);

        ctx.prefers_dark.set(true);
        assert_eq!(ctx.resolved(), ResolvedTheme::Dark);

        ctx.appearance.set(Appearance::Light);
        assert_eq!(ctx.resolved(), ResolvedTheme::Light);
    }
}
