use leptos::prelude::*;

/// How long the copied confirmation stays visible.
pub const CONFIRM_WINDOW_MS: i32 = 2_000;

/// Two-state confirmation flag behind the copy button.
///
/// Every confirmation hands out a [`ResetToken`] for the reset that follows
/// it. [`CopyConfirmation::expire`] honors only the token of the latest
/// confirmation, so a reset scheduled before a re-click can never clear the
/// newer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyConfirmation {
    copied: bool,
    epoch: u64,
}

/// Claim ticket for the scheduled reset of a [`CopyConfirmation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

impl CopyConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Record a copy and return the token for the reset that must follow.
    pub fn confirm(&mut self) -> ResetToken {
        self.copied = true;
        self.epoch += 1;
        ResetToken(self.epoch)
    }

    /// Clear the confirmation if `token` is still the latest one issued.
    /// Returns whether the state changed.
    pub fn expire(&mut self, token: ResetToken) -> bool {
        if token.0 == self.epoch && self.copied {
            self.copied = false;
            true
        } else {
            false
        }
    }
}

/// A button that copies text to clipboard with visual feedback:
/// the label swaps to a check mark while the confirmation window is open.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Button label (shown before copy)
    #[prop(into)]
    label: String,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (state, set_state) = signal(CopyConfirmation::new());
    #[cfg(not(feature = "hydrate"))]
    let (state, _) = signal(CopyConfirmation::new());

    #[cfg(feature = "hydrate")]
    let on_press = {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        // Handle of the scheduled reset; at most one is outstanding.
        let pending = StoredValue::new(None::<i32>);

        // Clean up the pending reset on component unmount
        on_cleanup(move || {
            if let (Some(window), Some(handle)) = (web_sys::window(), pending.get_value()) {
                window.clear_timeout_with_handle(handle);
            }
        });

        move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            crate::clipboard::write_text(&text);

            let mut confirmation = state.get_untracked();
            let token = confirmation.confirm();
            set_state.set(confirmation);

            // Re-arm: an earlier reset must not fire after a newer copy
            if let Some(handle) = pending.get_value() {
                window.clear_timeout_with_handle(handle);
                pending.set_value(None);
            }

            let reset = Closure::once_into_js(move || {
                pending.set_value(None);
                let mut confirmation = state.get_untracked();
                if confirmation.expire(token) {
                    set_state.set(confirmation);
                }
            });
            match window
                .set_timeout_with_callback_and_timeout_and_arguments_0(reset.unchecked_ref(), CONFIRM_WINDOW_MS)
            {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(_) => web_sys::console::error_1(&"failed to schedule copy reset".into()),
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_press = {
        let _ = text;
        move |_| {}
    };

    view! {
        <button
            type="button"
            on:click=on_press
            class="px-2 py-1 rounded text-sm text-slate-400 hover:text-white transition-colors cursor-pointer"
        >
            {move || {
                if state.get().copied() {
                    "\u{2713} Copied!".to_string()
                } else {
                    label.clone()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert!(!CopyConfirmation::new().copied());
    }

    #[test]
    fn confirm_is_immediate() {
        let mut c = CopyConfirmation::new();
        c.confirm();
        assert!(c.copied());
    }

    #[test]
    fn expire_clears_the_confirmation() {
        let mut c = CopyConfirmation::new();
        let token = c.confirm();
        assert!(c.expire(token));
        assert!(!c.copied());
    }

    #[test]
    fn expire_fires_at_most_once() {
        let mut c = CopyConfirmation::new();
        let token = c.confirm();
        assert!(c.expire(token));
        assert!(!c.expire(token));
        assert!(!c.copied());
    }

    #[test]
    fn stale_reset_keeps_newer_confirmation_visible() {
        let mut c = CopyConfirmation::new();
        let first = c.confirm();
        let second = c.confirm();
        // The first click's reset arrives late; it must not clear the second
        assert!(!c.expire(first));
        assert!(c.copied());
        assert!(c.expire(second));
        assert!(!c.copied());
    }

    #[test]
    fn reconfirm_after_expiry_opens_a_new_window() {
        let mut c = CopyConfirmation::new();
        let token = c.confirm();
        assert!(c.expire(token));

        let token = c.confirm();
        assert!(c.copied());
        assert!(c.expire(token));
        assert!(!c.copied());
    }
}
