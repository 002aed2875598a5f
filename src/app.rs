use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use gloo::dialogs::confirm;
use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{DashboardConfig, DashboardController, Poller},
    domain::{
        dashboard::{FilterCriteria, QuickFilter, Region, SortOrder},
        logging::{LogComponent, get_logger},
        trading::BotAction,
    },
    global_state::{self, globals},
    infrastructure::HttpDashboardApi,
    presentation::{
        dom_ids,
        styles::STYLES,
        view_model::{
            self, CardFooter, CoinCardView, CurrentScanView, GridView, HeaderView, NO_POSITIONS,
            NO_SIGNALS, NO_STATS, PositionCardView, StatRow,
        },
    },
};

pub type SharedController = Rc<DashboardController<HttpDashboardApi>>;

/// Click handler that runs `action` on the shared controller in the background
fn dispatch<F, Fut>(controller: &SharedController, action: F) -> impl Fn(ev::MouseEvent) + 'static
where
    F: Fn(SharedController) -> Fut + 'static,
    Fut: Future + 'static,
{
    let controller = Rc::clone(controller);
    move |_| {
        let task = action(Rc::clone(&controller));
        spawn_local(async move {
            task.await;
        });
    }
}

fn placeholder(text: &str) -> View {
    let text = text.to_string();
    view! { <div class="placeholder">{text}</div> }.into_view()
}

/// 🦀 Root component: wires the controller, the store and the poller
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let controller: SharedController =
        Rc::new(DashboardController::new(HttpDashboardApi::new(config.api_base.clone()), config));
    let settings = controller.config();
    global_state::bind(&controller, settings.notification_ms);
    globals().criteria.set(FilterCriteria::with_threshold(settings.high_change_threshold));
    let poll_interval_ms = settings.poll_interval_ms;
    provide_context(Rc::clone(&controller));

    {
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.refresh_all().await;
        });
    }

    let poller = Rc::new(RefCell::new(Poller::new()));
    poller.borrow_mut().start(Rc::clone(&controller), poll_interval_ms);
    on_cleanup(move || poller.borrow_mut().stop());

    get_logger().info(LogComponent::Presentation("App"), "✅ Dashboard mounted");

    view! {
        <style>{STYLES}</style>
        <div class="container">
            <Header/>
            <div class="main-grid">
                <section>
                    <div class="panel">
                        <h2>"🔥 Top Gainers"</h2>
                        <FilterBar/>
                        <ConditionLegend/>
                        <CoinsGrid/>
                    </div>
                </section>
                <aside>
                    <CurrentScanPanel/>
                    <SystemStatusPanel/>
                    <PositionsPanel/>
                    <TradingStatsPanel/>
                    <SignalsPanel/>
                </aside>
            </div>
            <NotificationToast/>
        </div>
    }
}

/// Bot status, control buttons and header counters
#[component]
fn Header() -> impl IntoView {
    let controller = expect_context::<SharedController>();
    let g = globals();
    let header =
        create_memo(move |_| g.with_regions(&[Region::Header, Region::Positions], HeaderView::from_state));

    let on_start = dispatch(&controller, |c| async move { c.start_bot().await });
    let on_stop = dispatch(&controller, |c| async move { c.stop_bot().await });
    let on_test_bot = dispatch(&controller, |c| async move { c.test_bot().await });
    let on_test_telegram = dispatch(&controller, |c| async move { c.test_telegram().await });
    let on_refresh = dispatch(&controller, |c| async move { c.refresh_all().await });

    view! {
        <header class="header">
            <h1>"🚀 Signal Bot Dashboard"</h1>
            <div id=dom_ids::BOT_STATUS class=move || header.with(|h| h.status_class.clone())>
                <span class="status-dot"></span>
                <span id=dom_ids::STATUS_TEXT>{move || header.with(|h| h.status_text)}</span>
            </div>
            <div class="controls">
                <button
                    id=dom_ids::START_BTN
                    class="btn btn-start"
                    class:loading=move || g.is_pending(&BotAction::Start)
                    disabled=move || g.is_pending(&BotAction::Start) || header.with(|h| h.online)
                    on:click=on_start
                >
                    "▶️ Start"
                </button>
                <button
                    id=dom_ids::STOP_BTN
                    class="btn btn-stop"
                    class:loading=move || g.is_pending(&BotAction::Stop)
                    disabled=move || g.is_pending(&BotAction::Stop) || !header.with(|h| h.online)
                    on:click=on_stop
                >
                    "⏹️ Stop"
                </button>
                <button
                    id=dom_ids::TEST_BOT_BTN
                    class="btn btn-test"
                    class:loading=move || g.is_pending(&BotAction::TestBot)
                    disabled=move || g.is_pending(&BotAction::TestBot)
                    on:click=on_test_bot
                >
                    "🧪 Test Bot"
                </button>
                <button
                    id=dom_ids::TEST_TELEGRAM_BTN
                    class="btn btn-test"
                    class:loading=move || g.is_pending(&BotAction::TestTelegram)
                    disabled=move || g.is_pending(&BotAction::TestTelegram)
                    on:click=on_test_telegram
                >
                    "📨 Test Telegram"
                </button>
                <button id=dom_ids::REFRESH_BTN class="btn btn-refresh" on:click=on_refresh>
                    "🔄 Refresh"
                </button>
            </div>
            <div class="stats-bar">
                <div class="stat">
                    <span class="stat-value" id=dom_ids::TOTAL_SYMBOLS>{move || header.with(|h| h.total_symbols.clone())}</span>
                    <span class="stat-label">"Symbols"</span>
                </div>
                <div class="stat">
                    <span class="stat-value" id=dom_ids::SIGNALS_COUNT>{move || header.with(|h| h.signals_count.clone())}</span>
                    <span class="stat-label">"Signals"</span>
                </div>
                <div class="stat">
                    <span class="stat-value" id=dom_ids::ALERT_COUNT>{move || header.with(|h| h.alert_count.clone())}</span>
                    <span class="stat-label">"Alerts"</span>
                </div>
                <div class="stat">
                    <span class="stat-value" id=dom_ids::ACTIVE_POSITIONS>{move || header.with(|h| h.active_positions.clone())}</span>
                    <span class="stat-label">"Positions"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{move || g.last_update.get()}</span>
                    <span class="stat-label">"Last Update"</span>
                </div>
            </div>
        </header>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let g = globals();

    view! {
        <div class="filters">
            <input
                id=dom_ids::SEARCH_INPUT
                type="text"
                placeholder="Search coins..."
                prop:value=move || g.criteria.with(|c| c.search.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    g.criteria.update(|c| c.search = term);
                }
            />
            {QuickFilter::iter()
                .map(|filter| {
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || g.criteria.with(|c| c.quick == filter)
                            on:click=move |_| g.criteria.update(|c| c.quick = filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
            <select
                id=dom_ids::SORT_SELECT
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<SortOrder>() {
                        Ok(order) => g.criteria.update(|c| c.sort = order),
                        Err(_) => get_logger().warn(
                            LogComponent::Presentation("FilterBar"),
                            "⚠️ Unknown sort option selected",
                        ),
                    }
                }
            >
                {SortOrder::iter()
                    .map(|order| {
                        let value = order.as_ref().to_string();
                        view! {
                            <option value=value selected=move || g.criteria.with(|c| c.sort == order)>
                                {order.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn ConditionLegend() -> impl IntoView {
    view! {
        <div class="legend">
            {view_model::legend()
                .into_iter()
                .map(|item| view! { <span title=item.hint>{item.label}": "{item.hint}</span> })
                .collect_view()}
        </div>
    }
}

#[component]
fn CoinsGrid() -> impl IntoView {
    let g = globals();
    let grid = create_memo(move |_| {
        g.criteria
            .with(|criteria| g.with_regions(&[Region::Coins], |state| view_model::coin_grid(state, criteria)))
    });

    view! {
        <div id=dom_ids::COINS_GRID class="coins-grid">
            {move || match grid.get() {
                GridView::Placeholder { text, is_error } => {
                    view! { <div class="placeholder" class:error=is_error>{text}</div> }.into_view()
                }
                GridView::Cards(cards) => {
                    cards.into_iter().map(|card| view! { <CoinCard card=card/> }).collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn CoinCard(card: CoinCardView) -> impl IntoView {
    let CoinCardView {
        coin,
        card_class,
        price,
        change,
        change_class,
        status_text,
        scanning,
        is_signal,
        indicators,
        progress_width,
        readings,
        footer,
        tooltip,
        ..
    } = card;

    view! {
        <div class=card_class title=tooltip>
            <div class="coin-header">
                <span class="coin-name">{coin}</span>
                <span class=change_class>{change}</span>
            </div>
            <div class="coin-price">"$"{price}</div>
            <div class="scan-status" class:scanning=scanning class:signal=is_signal>{status_text}</div>
            <div class="indicators">
                {indicators
                    .into_iter()
                    .map(|indicator| {
                        view! {
                            <span class="indicator" class:met=indicator.met title=indicator.hint>
                                {indicator.label}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style:width=progress_width></div>
            </div>
            {readings.map(|line| view! { <div class="readings">{line}</div> })}
            {match footer {
                CardFooter::Volume(volume) => view! { <div class="coin-volume">"Vol: $"{volume}</div> }.into_view(),
                CardFooter::Signal => view! { <div class="signal-flag">"🚨 SIGNAL"</div> }.into_view(),
            }}
        </div>
    }
}

fn stat_rows_view(rows: Vec<StatRow>) -> View {
    rows.into_iter()
        .map(|row| {
            view! {
                <div class="stat-row">
                    <span>{row.label}</span>
                    <span class=row.class>{row.value}</span>
                </div>
            }
        })
        .collect_view()
}

/// Readings of the coin the backend is scanning right now
#[component]
fn CurrentScanPanel() -> impl IntoView {
    let g = globals();
    let scan = create_memo(move |_| g.with_regions(&[Region::Coins], CurrentScanView::from_state));

    view! {
        <div class="panel">
            <h2>"🔍 Current Scan"</h2>
            {move || {
                let scan = scan.get();
                let title = scan.title();
                match scan {
                    CurrentScanView::Details { rows, .. } => view! {
                        <div class="current-scan-title">{title}</div>
                        <div class="stats-grid">{stat_rows_view(rows)}</div>
                    }
                    .into_view(),
                    CurrentScanView::Waiting { .. } => {
                        view! { <div class="placeholder scanning">{title}</div> }.into_view()
                    }
                    CurrentScanView::Idle => placeholder(&title),
                }
            }}
        </div>
    }
}

#[component]
fn SystemStatusPanel() -> impl IntoView {
    let g = globals();
    let rows =
        create_memo(move |_| g.with_regions(&[Region::Header, Region::Coins], view_model::system_status_rows));

    view! {
        <div class="panel">
            <h2>"⚙️ System Status"</h2>
            <div class="stats-grid">{move || stat_rows_view(rows.get())}</div>
        </div>
    }
}

#[component]
fn PositionsPanel() -> impl IntoView {
    let g = globals();
    let cards = create_memo(move |_| {
        g.with_regions(&[Region::Positions], |state| view_model::position_cards(&state.positions))
    });

    view! {
        <div class="panel">
            <h2>"📊 Active Positions"</h2>
            <div id=dom_ids::POSITIONS_LIST>
                {move || {
                    let cards = cards.get();
                    if cards.is_empty() {
                        placeholder(NO_POSITIONS)
                    } else {
                        cards.into_iter().map(|card| view! { <PositionCard card=card/> }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn PositionCard(card: PositionCardView) -> impl IntoView {
    let controller = expect_context::<SharedController>();
    let g = globals();
    let pending_action = BotAction::ClosePosition(card.symbol.clone());
    let loading_action = pending_action.clone();

    let symbol = card.symbol.clone();
    let coin = card.coin.clone();
    let on_close = move |_: ev::MouseEvent| {
        if !confirm(&format!("Close position for {}?", coin)) {
            return;
        }
        let symbol = symbol.clone();
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.close_position(symbol).await;
        });
    };

    view! {
        <div class="position-card">
            <div class="position-header">
                <strong>{card.coin}</strong>
                <span class=format!("status-badge {}", card.status_class)>{card.status_label}</span>
                {card.entry_level.map(|level| view! { <span class="entry-level">{level}</span> })}
                <button
                    class="btn btn-close"
                    class:loading=move || g.is_pending(&loading_action)
                    disabled=move || g.is_pending(&pending_action)
                    on:click=on_close
                >
                    "✕ Close"
                </button>
            </div>
            <div class="position-row">
                <span>"Entry $"{card.entry}</span>
                <span>"Now $"{card.current}</span>
                <span class=card.pnl_class>{card.pnl}</span>
            </div>
            {card.targets.map(|targets| view! { <div class="position-row">{targets}</div> })}
            {card.remaining.map(|remaining| view! { <div class="position-row">{remaining}</div> })}
            {card.realized.map(|realized| view! { <div class="position-row">{realized}</div> })}
            {card.opened.map(|opened| view! { <div class="position-row">"Opened "{opened}</div> })}
        </div>
    }
}

#[component]
fn TradingStatsPanel() -> impl IntoView {
    let g = globals();
    let rows = create_memo(move |_| {
        g.with_regions(&[Region::Stats], |state| state.stats.as_ref().map(view_model::stats_rows))
    });

    view! {
        <div class="panel">
            <h2>"📈 Trading Statistics"</h2>
            <div id=dom_ids::TRADING_STATS>
                {move || match rows.get() {
                    None => placeholder(NO_STATS),
                    Some(rows) => view! { <div class="stats-grid">{stat_rows_view(rows)}</div> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn SignalsPanel() -> impl IntoView {
    let g = globals();
    let alerts = create_memo(move |_| {
        g.with_regions(&[Region::Signals], |state| view_model::alert_views(&state.alerts))
    });

    view! {
        <div class="panel">
            <h2>"🚨 Recent Signals"</h2>
            <div id=dom_ids::SIGNALS_LIST class="signals-list">
                {move || {
                    let alerts = alerts.get();
                    if alerts.is_empty() {
                        placeholder(NO_SIGNALS)
                    } else {
                        alerts
                            .into_iter()
                            .map(|alert| {
                                view! {
                                    <div class=alert.class>
                                        <div>
                                            <strong>{alert.label}</strong>
                                            " "
                                            <span class="signal-time">{alert.time}</span>
                                        </div>
                                        <div>{alert.message}</div>
                                        {alert.details.map(|details| view! { <div class="signal-details">{details}</div> })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn NotificationToast() -> impl IntoView {
    let g = globals();

    view! {
        <div
            id=dom_ids::NOTIFICATION
            class=move || {
                g.notification.with(|shown| match shown {
                    Some(notification) => format!("{} show", notification.kind.css_class()),
                    None => "notification".to_string(),
                })
            }
        >
            {move || g.notification.with(|shown| shown.as_ref().map(|n| n.text.clone()).unwrap_or_default())}
        </div>
    }
}
