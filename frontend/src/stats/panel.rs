use crate::config::{COUNT_UP_DURATION_MS, COUNT_UP_TICK_MS, STATS_THRESHOLD, STAT_CARD_STAGGER_MS};
use crate::components::use_seen_once;
use crate::stats::{CountUp, Stat};
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: &'static [Stat],
}

/// Grid of statistics that count up the first time the panel scrolls into
/// view. Leaving and re-entering the viewport does not replay it.
#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let panel_ref = use_node_ref();
    let in_view = use_seen_once(panel_ref.clone(), STATS_THRESHOLD);
    let elapsed_ms = use_state(|| 0.0f64);

    // Ticker that drives every counter. Reaching the end changes the deps,
    // so the cleanup drops the interval outside its own callback.
    {
        let elapsed_ms = elapsed_ms.clone();
        let finished = *elapsed_ms >= COUNT_UP_DURATION_MS;
        use_effect_with_deps(
            move |(in_view, finished): &(bool, bool)| {
                let ticker = (*in_view && !*finished).then(|| {
                    let started = js_sys::Date::now() - *elapsed_ms;
                    Interval::new(COUNT_UP_TICK_MS, move || {
                        let elapsed = js_sys::Date::now() - started;
                        elapsed_ms.set(elapsed.min(COUNT_UP_DURATION_MS));
                    })
                });
                move || drop(ticker)
            },
            (in_view, finished),
        );
    }

    html! {
        <div ref={panel_ref} class="stats-grid">
            {
                props.stats.iter().enumerate().map(|(index, stat)| {
                    let shown = if in_view {
                        stat.render(CountUp::new(stat.target, COUNT_UP_DURATION_MS).value_at(*elapsed_ms))
                    } else {
                        "0".to_string()
                    };
                    html! {
                        <div
                            key={stat.label}
                            class="stat-card"
                            style={format!("transition-delay: {}ms;", index as u32 * STAT_CARD_STAGGER_MS)}
                        >
                            <div class="stat-value">{shown}</div>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
