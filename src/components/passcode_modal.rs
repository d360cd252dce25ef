//! Passcode Modal Component
//!
//! Digit boxes for the secret mission code. All state lives in the
//! passcode flow held by the store; this component forwards events and
//! keeps focus where the flow says it should be.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_group, AppStateStoreFields};

#[component]
pub fn PasscodeModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let length = store.passcode().with_untracked(|flow| flow.code_length());
    let inputs = StoredValue::new((0..length).map(|_| NodeRef::<html::Input>::new()).collect::<Vec<_>>());

    let is_open = move || store.passcode().read().is_open();
    let entry = move || store.passcode().read().entry().cloned();
    let digit = move |index: usize| {
        entry()
            .and_then(|e| e.digits.get(index).copied().flatten())
            .map(String::from)
            .unwrap_or_default()
    };
    let group_name = move || {
        entry()
            .and_then(|e| store_group(&store, &e.group_id))
            .map(|g| g.name)
            .unwrap_or_default()
    };
    let rejected = move || entry().map(|e| e.rejected).unwrap_or(false);

    // follow the flow's focus position (also returns to the first box after a reject)
    Effect::new(move |_| {
        let Some(focus) = store.passcode().read().entry().map(|e| e.focus) else {
            return;
        };
        let target = inputs.with_value(|refs| refs.get(focus).and_then(|r| r.get()));
        if let Some(input) = target {
            let _ = input.focus();
            // typing over a filled box replaces its digit
            input.select();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close_passcode();
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| ctx.close_passcode()>
                <div
                    class="modal"
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <button class="modal-close" on:click=move |_| ctx.close_passcode()>"×"</button>
                    <h2 class="modal-title">"🔑 시크릿 미션"</h2>
                    <p class="modal-subtitle">{group_name} " 팀 코드를 입력하세요"</p>

                    <div class="passcode-inputs">
                        {(0..length).map(|index| {
                            let node_ref = inputs.with_value(|refs| refs[index]);
                            view! {
                                <input
                                    node_ref=node_ref
                                    class="passcode-digit"
                                    type="text"
                                    inputmode="numeric"
                                    autocomplete="one-time-code"
                                    prop:value=move || digit(index)
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        ctx.enter_digit(index, &value);
                                        // dropped input must not linger in the box
                                        if let Some(input) = node_ref.get() {
                                            input.set_value(&digit(index));
                                        }
                                    }
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        if ev.key() == "Backspace" {
                                            ev.prevent_default();
                                            ctx.backspace(index);
                                        }
                                    }
                                    on:paste=move |ev: web_sys::ClipboardEvent| {
                                        ev.prevent_default();
                                        if let Some(text) = ev.clipboard_data().and_then(|data| data.get_data("text").ok()) {
                                            ctx.paste_code(&text);
                                        }
                                    }
                                />
                            }
                        }).collect_view()}
                    </div>

                    <Show when=rejected>
                        <p class="passcode-error">"코드가 올바르지 않아요. 다시 입력해 주세요."</p>
                    </Show>

                    <button class="passcode-reset" on:click=move |_| ctx.reset_passcode()>"지우기"</button>
                </div>
            </div>
        </Show>
    }
}
