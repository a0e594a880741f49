use crate::dom::{reaches_threshold, VisibilityObserver};
use crate::stats::ViewLatch;
use yew::prelude::*;

/// `true` from the first time `threshold` of the node is visible, for the
/// rest of the component's life. The observer disconnects on that first
/// sighting. Without IntersectionObserver support it reports `true`
/// immediately.
#[hook]
pub fn use_seen_once(node: NodeRef, threshold: f64) -> bool {
    let latch = use_mut_ref(ViewLatch::default);
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<web_sys::Element>().and_then(|element| {
                    let mark_seen = seen.clone();
                    let observer = VisibilityObserver::new(threshold, move |entry, observer| {
                        if reaches_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                            && latch.borrow_mut().trip()
                        {
                            observer.disconnect();
                            mark_seen.set(true);
                        }
                    });
                    match observer {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some(observer)
                        }
                        Err(e) => {
                            log::warn!("Visibility tracking unavailable: {}", e);
                            seen.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    *seen
}
