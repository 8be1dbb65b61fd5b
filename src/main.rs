//! Lock landing page entry point
//!
//! Wires the pure behavior modules to the DOM. Shared state lives behind
//! `Rc<RefCell<...>>` and every listener is leaked with `Closure::forget`,
//! since the page lifetime is the only lifecycle there is.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{
        Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
        HtmlMediaElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, MouseEvent, Window,
    };

    use lock_orbit::consts::{HEADER_REVEAL_DELAY_MS, REVEAL_THRESHOLD};
    use lock_orbit::page::{
        Accordion, ContactPayload, DeliveryOutcome, DeliveryRoute, FormStatus, Showcase, StepMedia,
        contact, swap_for,
    };
    use lock_orbit::{OrbitSimulator, boundary_radius};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lock page behaviors starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        setup_accordion(&document);
        setup_showcase(&document);
        setup_contact_form(&document);
        setup_orbit_ball(&window, &document);
        setup_scroll_reveals(&window, &document);

        log::info!("Lock page behaviors running");
    }

    /// Collect a selector's matches as elements of type `T`
    fn select_all<T: JsCast>(root: &Document, selector: &str) -> Vec<T> {
        let Ok(nodes) = root.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<T>().ok())
            .collect()
    }

    // --- FAQ accordion ---

    fn setup_accordion(document: &Document) {
        let items: Vec<Element> = select_all(document, ".faq-item");
        if items.is_empty() {
            return;
        }

        let accordion = Rc::new(RefCell::new(Accordion::new(items.len())));
        let items = Rc::new(items);

        for (index, item) in items.iter().enumerate() {
            let Some(question) = item.query_selector(".faq-question").ok().flatten() else {
                continue;
            };

            let accordion = accordion.clone();
            let items = items.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let Some(change) = accordion.borrow_mut().toggle(index) else {
                    return;
                };
                for &closed in &change.collapse {
                    if let Some(item) = items.get(closed) {
                        let _ = item.class_list().remove_1("active");
                        set_answer_height(item, false);
                    }
                }
                if let Some(opened) = change.expand {
                    if let Some(item) = items.get(opened) {
                        let _ = item.class_list().add_1("active");
                        set_answer_height(item, true);
                    }
                }
            });
            let _ = question
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Set or clear the answer panel's max-height for the collapse animation
    fn set_answer_height(item: &Element, expand: bool) {
        let Some(answer) = item.query_selector(".faq-answer").ok().flatten() else {
            return;
        };
        let Ok(answer) = answer.dyn_into::<HtmlElement>() else {
            return;
        };
        if expand {
            // scrollHeight covers the full content, so the CSS transition
            // animates to the real height
            let height = format!("{}px", answer.scroll_height());
            let _ = answer.style().set_property("max-height", &height);
        } else {
            let _ = answer.style().remove_property("max-height");
        }
    }

    // --- Experience showcase ---

    fn setup_showcase(document: &Document) {
        let Some(video) = document.get_element_by_id("experience-video") else {
            return;
        };
        let Ok(video) = video.dyn_into::<HtmlMediaElement>() else {
            log::warn!("#experience-video is not a media element");
            return;
        };

        let steps: Vec<HtmlElement> = select_all(document, ".experience-section .step-item");
        if steps.is_empty() {
            return;
        }

        let media: Vec<StepMedia> = steps
            .iter()
            .map(|step| StepMedia {
                video: step.dataset().get("video"),
                poster: step.dataset().get("poster"),
            })
            .collect();

        let _ = steps[0].class_list().add_1("is-active");

        let showcase = Rc::new(RefCell::new(Showcase::new(steps.len())));
        let steps = Rc::new(steps);
        let media = Rc::new(media);

        for index in 0..steps.len() {
            // Hover and keyboard focus drive the same activation
            for event_name in ["mouseenter", "focusin"] {
                let showcase = showcase.clone();
                let steps = steps.clone();
                let media = media.clone();
                let video = video.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    activate_step(index, &showcase, &steps, &media, &video);
                });
                let _ = steps[index]
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn activate_step(
        index: usize,
        showcase: &Rc<RefCell<Showcase>>,
        steps: &[HtmlElement],
        media: &[StepMedia],
        video: &HtmlMediaElement,
    ) {
        if showcase.borrow_mut().activate(index) {
            for (i, step) in steps.iter().enumerate() {
                if i == index {
                    let _ = step.class_list().add_1("is-active");
                } else {
                    let _ = step.class_list().remove_1("is-active");
                }
            }
        }

        let Some(step_media) = media.get(index) else {
            return;
        };
        let current = video.get_attribute("src");
        if let Some(swap) = swap_for(current.as_deref(), step_media) {
            let _ = video.set_attribute("src", &swap.video);
            if let Some(poster) = &swap.poster {
                let _ = video.set_attribute("poster", poster);
            }
            video.load();
            if let Ok(promise) = video.play() {
                // Autoplay may be blocked; swallow the rejection
                spawn_local(async move {
                    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
                });
            }
        }
    }

    // --- Contact form ---

    fn setup_contact_form(document: &Document) {
        let Some(form) = document.query_selector(".contact-form").ok().flatten() else {
            return;
        };
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            return;
        };
        let Some(button) = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
        else {
            return;
        };
        let Ok(button) = button.dyn_into::<HtmlButtonElement>() else {
            return;
        };
        let status = form.query_selector(".form-status").ok().flatten();

        let document = document.clone();
        let form_handle = form.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();

            let payload = read_payload(&document);
            if !payload.is_complete() {
                show_status(status.as_ref(), &FormStatus::incomplete());
                return;
            }

            let original_label = button.text_content().unwrap_or_default();
            button.set_disabled(true);
            button.set_text_content(Some("Sending..."));
            show_status(status.as_ref(), &FormStatus::sending());

            let form = form_handle.clone();
            let button = button.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = contact::submit(&payload).await;
                if let DeliveryOutcome::Delivered { via } = outcome {
                    match via {
                        DeliveryRoute::Primary => log::info!("Message delivered"),
                        DeliveryRoute::NoCorsFallback => {
                            log::info!("Message delivered via no-cors fallback")
                        }
                    }
                    form.reset();
                }
                show_status(status.as_ref(), &FormStatus::for_outcome(outcome));
                // Always restore the button, delivered or not
                button.set_disabled(false);
                button.set_text_content(Some(&original_label));
            });
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Read and trim the three form fields
    fn read_payload(document: &Document) -> ContactPayload {
        let field = |id: &str| -> String {
            document
                .get_element_by_id(id)
                .map(|el| {
                    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                        input.value()
                    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                        area.value()
                    } else {
                        String::new()
                    }
                })
                .unwrap_or_default()
        };
        ContactPayload::from_fields(&field("name"), &field("email"), &field("message"))
    }

    fn show_status(status: Option<&Element>, form_status: &FormStatus) {
        let Some(el) = status else {
            return;
        };
        el.set_text_content(Some(form_status.text));
        let list = el.class_list();
        let _ = list.remove_2("is-success", "is-error");
        let class = form_status.kind.css_class();
        if !class.is_empty() {
            let _ = list.add_1(class);
        }
    }

    // --- Orbit ball ---

    /// Shared state for the orbit ball animation
    struct OrbitPage {
        sim: OrbitSimulator,
        /// Pointer region (`.lock-illustration`)
        illustration: HtmlElement,
        /// Tilting card (`.privacy-token`)
        token: HtmlElement,
        /// Rendered ball (`.privacy-orbit`)
        ball: HtmlElement,
    }

    fn setup_orbit_ball(window: &Window, document: &Document) {
        if prefers_reduced_motion(window) {
            log::info!("Reduced motion requested; orbit ball disabled");
            return;
        }

        let Some(illustration) = query_html(document, ".lock-illustration") else {
            return;
        };
        let Some(token) = illustration
            .query_selector(".privacy-token")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let Some(ball) = token
            .query_selector(".privacy-orbit")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let radius = boundary_radius(token.offset_width() as f32);
        let page = Rc::new(RefCell::new(OrbitPage {
            sim: OrbitSimulator::new(radius),
            illustration: illustration.clone(),
            token,
            ball,
        }));

        // The boundary follows the token's rendered size
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut p = page.borrow_mut();
                let radius = boundary_radius(p.token.offset_width() as f32);
                p.sim.set_radius(radius);
            });
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer steering + card tilt
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut p = page.borrow_mut();
                let bounds = p.illustration.get_bounding_client_rect();
                let (w, h) = (bounds.width() as f32, bounds.height() as f32);
                if w <= 0.0 || h <= 0.0 {
                    // Degenerate geometry never reaches the simulator
                    return;
                }
                let local = Vec2::new(
                    event.client_x() as f32 - bounds.left() as f32,
                    event.client_y() as f32 - bounds.top() as f32,
                );
                p.sim.pointer_move(local, Vec2::new(w, h));

                let tilt = p.sim.tilt();
                let _ = p.token.class_list().add_1("is-active");
                let transform = format!(
                    "rotateX({:.3}deg) rotateY({:.3}deg) scale(1.1)",
                    tilt.x, tilt.y
                );
                let _ = p.token.style().set_property("transform", &transform);
            });
            let _ = illustration
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer gone: gravity off, card settles back
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut p = page.borrow_mut();
                p.sim.pointer_leave();
                let _ = p.token.class_list().remove_1("is-active");
                let _ = p
                    .token
                    .style()
                    .set_property("transform", "rotateX(0deg) rotateY(0deg) scale(1)");
            });
            let _ = illustration
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        request_animation_frame(page);
    }

    fn prefers_reduced_motion(window: &Window) -> bool {
        window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
        document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn request_animation_frame(page: Rc<RefCell<OrbitPage>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            orbit_frame(page, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn orbit_frame(page: Rc<RefCell<OrbitPage>>, time: f64) {
        {
            let mut p = page.borrow_mut();
            let pos = p.sim.tick(time);
            let _ = p
                .ball
                .style()
                .set_property("--ball-x", &format!("{:.2}px", pos.x));
            let _ = p
                .ball
                .style()
                .set_property("--ball-y", &format!("{:.2}px", pos.y));
        }

        request_animation_frame(page);
    }

    // --- Scroll reveals ---

    fn setup_scroll_reveals(window: &Window, document: &Document) {
        let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
            move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                for entry in entries {
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("is-visible");
                        // Each element reveals once
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root(None);
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
        callback.forget();
        let Ok(observer) = observer else {
            log::warn!("IntersectionObserver unavailable; reveals stay hidden");
            return;
        };

        let animated: Vec<Element> = select_all(
            document,
            ".animate-on-load, .animate-left, .animate-right, .fade-up",
        );
        for element in &animated {
            observer.observe(element);
        }

        // The header slides in shortly after load
        let document = document.clone();
        let timeout = Closure::<dyn FnMut()>::new(move || {
            if let Some(header) = document.query_selector("header").ok().flatten() {
                let _ = header.class_list().add_1("is-visible");
            }
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            timeout.as_ref().unchecked_ref(),
            HEADER_REVEAL_DELAY_MS,
        );
        timeout.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lock page behaviors (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to run inside the page");

    println!("\nRunning orbit smoke...");
    smoke_orbit();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_orbit() {
    use glam::Vec2;
    use lock_orbit::OrbitSimulator;

    let mut sim = OrbitSimulator::new(70.0);
    sim.pointer_move(Vec2::new(240.0, 60.0), Vec2::new(240.0, 120.0));
    let mut now = 0.0;
    sim.tick(now);
    for _ in 0..120 {
        now += 1000.0 / 60.0;
        sim.tick(now);
    }
    let pos = sim.position();
    assert!(pos.length() <= 70.0 + 1e-3, "ball escaped the boundary");
    println!("✓ Orbit smoke passed! ball at ({:.1}, {:.1})", pos.x, pos.y);
}
