//! Privacy-mask editor: preview image, SVG polygon overlay, pointer wiring.
//!
//! The `<img>` carries the live preview; an absolutely positioned `<svg>`
//! of the same rendered size draws the committed polygons and the draft.
//! Pointer events land on the overlay, run through the click arbiter in
//! the `mask` crate, and mutate the editor state. Every commit or delete
//! pushes the whole region set to the device; the device pushes back on
//! the next mount, so it stays the source of truth across reloads.

use leptos::prelude::*;
use mask::click::{ClickArbiter, ClickEffect, ClickInput};
use mask::consts::MIN_REGION_VERTICES;
use mask::geometry::Point;
use mask::region::{Region, RegionId};

use crate::net::api;
use crate::state::capture::CaptureState;
use crate::state::editor::EditorState;

/// Persist the full current region set, logging any failure except session
/// loss (the transport's redirect already handled that one).
fn push_regions(regions: Vec<Region>) {
    leptos::task::spawn_local(async move {
        if let Err(e) = api::save_regions(&regions).await {
            api::report("saving privacy mask", &e);
        }
    });
}

/// Arm the single-click confirmation timer for a held click.
fn arm_click_timer(seq: u64, arbiter: StoredValue<ClickArbiter>, editor: RwSignal<EditorState>) {
    #[cfg(target_arch = "wasm32")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            mask::consts::CLICK_CONFIRM_DELAY_MS,
        )))
        .await;
        dispatch(ClickInput::TimerFired { seq }, arbiter, editor);
    });
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (seq, arbiter, editor);
    }
}

/// Feed one input through the arbiter and apply the resulting effect.
fn dispatch(input: ClickInput, arbiter: StoredValue<ClickArbiter>, editor: RwSignal<EditorState>) {
    let Some(effect) = arbiter.try_update_value(|a| a.apply(input)).flatten() else {
        return;
    };
    match effect {
        ClickEffect::ArmTimer { seq } => arm_click_timer(seq, arbiter, editor),
        ClickEffect::AddVertex(pixel) => {
            editor.update(|ed| {
                // Drops input silently while the geometry is still invalid.
                if let Some(p) = ed.capture_point(pixel) {
                    ed.store.add_point(p);
                }
            });
        }
        ClickEffect::CompleteDraft => {
            let mut committed = None;
            editor.update(|ed| {
                let drafted = ed.store.draft().len();
                committed = ed.store.complete();
                if committed.is_none() && drafted > 0 {
                    log::warn!(
                        "discarded draft with {drafted} vertices; a mask needs at least {MIN_REGION_VERTICES}"
                    );
                }
            });
            if committed.is_some() {
                push_regions(editor.get_untracked().store.regions().to_vec());
            }
        }
        ClickEffect::CancelDraft => {
            editor.update(|ed| ed.store.cancel());
        }
    }
}

/// The privacy-mask editor over the live preview.
#[component]
pub fn MaskEditor() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let capture = expect_context::<RwSignal<CaptureState>>();
    let arbiter = StoredValue::new(ClickArbiter::new());
    let img_ref = NodeRef::<leptos::html::Img>::new();

    // Measure the rendered preview and record its size. The first valid
    // measurement after a source change fetches the authoritative region
    // set, so loaded regions are immediately renderable in pixel space;
    // later measurements only refresh the conversion basis.
    let measure = move || {
        let Some(img) = img_ref.get_untracked() else {
            return;
        };
        let rect = img.get_bounding_client_rect();
        let fetch_now = editor
            .try_update(|ed| ed.set_geometry(rect.width(), rect.height()))
            .unwrap_or(false);
        if fetch_now {
            leptos::task::spawn_local(async move {
                match api::fetch_regions().await {
                    Ok(regions) => editor.update(|ed| {
                        ed.store.replace_all(regions);
                        ed.loaded = true;
                    }),
                    // Fail-soft: the in-memory set stays as it was.
                    Err(e) => api::report("loading privacy mask", &e),
                }
            });
        }
    };
    let on_img_load = move |_| measure();

    // The stylesheet lets the preview shrink with the viewport, so a
    // window resize changes the pixel basis without a new image load.
    // Remeasure so clicks keep converting against the rendered size;
    // `set_geometry` only arms the fetch across source changes, so this
    // never refetches regions.
    let resize = window_event_listener(leptos::ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let p = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        dispatch(ClickInput::Press(p), arbiter, editor);
    };
    let on_dblclick = move |_| dispatch(ClickInput::DoublePress, arbiter, editor);
    let on_contextmenu = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatch(ClickInput::SecondaryPress, arbiter, editor);
    };

    let delete_region = move |id: RegionId| {
        editor.update(|ed| {
            ed.store.delete(id);
        });
        // Deleting an absent id still overwrites with the unchanged set.
        push_regions(editor.get_untracked().store.regions().to_vec());
    };

    let overlay_width = move || editor.get().geometry.width;
    let overlay_height = move || editor.get().geometry.height;

    let polygons = move || {
        let ed = editor.get();
        if !ed.geometry.is_valid() {
            return Vec::new();
        }
        ed.store
            .regions()
            .iter()
            .map(|region| {
                let outline = polygon_attr(&region.points, ed.geometry);
                let label = region
                    .center()
                    .map(|c| ed.geometry.to_pixels(c))
                    .unwrap_or(Point::new(0.0, 0.0));
                let id = region.id;
                view! {
                    <g class="mask-editor__region">
                        <polygon points=outline/>
                        <text x=label.x y=label.y>{format!("#{id}")}</text>
                    </g>
                }
            })
            .collect::<Vec<_>>()
    };

    let draft_points = move || {
        let ed = editor.get();
        if !ed.geometry.is_valid() {
            return String::new();
        }
        polygon_attr(ed.store.draft(), ed.geometry)
    };

    view! {
        <div class="mask-editor">
            <div class="mask-editor__stage">
                <img
                    node_ref=img_ref
                    class="mask-editor__preview"
                    src=move || capture.get().preview_url()
                    on:load=on_img_load
                />
                <svg
                    class="mask-editor__overlay"
                    width=overlay_width
                    height=overlay_height
                    on:click=on_click
                    on:dblclick=on_dblclick
                    on:contextmenu=on_contextmenu
                >
                    {polygons}
                    <polyline class="mask-editor__draft" points=draft_points/>
                </svg>
            </div>
            <ul class="mask-editor__regions">
                {move || {
                    editor
                        .get()
                        .store
                        .regions()
                        .iter()
                        .map(|region| {
                            let id = region.id;
                            let vertex_count = region.points.len();
                            view! {
                                <li>
                                    {format!("Mask #{id} ({vertex_count} points)")}
                                    <button on:click=move |_| delete_region(id)>"Delete"</button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <p class="mask-editor__hint">
                "Click to add points, double-click to close the mask, right-click to discard."
            </p>
        </div>
    }
}

/// Render a vertex list as an SVG `points` attribute in pixel space.
fn polygon_attr(points: &[Point], geometry: mask::geometry::PreviewGeometry) -> String {
    points
        .iter()
        .map(|p| {
            let px = geometry.to_pixels(*p);
            format!("{:.1},{:.1}", px.x, px.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
