use serde_json::json;
use signal_dashboard_wasm::application::ActionReply;
use signal_dashboard_wasm::domain::{
    dashboard::StatusUpdate,
    market_data::Symbol,
    scanning::ConditionKey,
    trading::{AlertKind, PositionStatus},
};
use signal_dashboard_wasm::infrastructure::dto::{
    ActionDto, ClosePositionRequest, GainersDto, StatusDto,
};

fn status_from(value: serde_json::Value) -> StatusUpdate {
    serde_json::from_value::<StatusDto>(value).expect("status payload").into()
}

#[test]
fn full_status_payload_maps_into_domain() {
    let update = status_from(json!({
        "total_symbols": 312,
        "signals_count": 4,
        "alert_count": 9,
        "running": true,
        "current_scanning": "sol",
        "top_opportunities": [{
            "symbol": "BTCUSDT",
            "conditions_met": 6,
            "rsi_5m": 44.1,
            "conditions": { "bb_touch": true, "ema_stack": true, "moon_phase": true }
        }],
        "positions": {
            "active_positions": [{
                "symbol": "ETHUSDT",
                "entry_price": 3000.0,
                "current_price": 3090.0,
                "status": "TP1_HIT",
                "pnl_percent": 3.0,
                "tp1_hit": true
            }],
            "statistics": { "total_trades": 10, "win_rate": 60.0 }
        },
        "alerts": [{ "type": "SIGNAL", "message": "BTCUSDT 8/8", "time": "12:00", "details": { "rsi": 28 } }]
    }));

    assert_eq!(update.header.total_symbols, 312);
    assert!(update.header.running);
    assert_eq!(update.current_scanning.as_deref(), Some("sol"));

    let opportunity = &update.opportunities[0];
    assert_eq!(opportunity.conditions_met, 6);
    assert!(opportunity.conditions.get(ConditionKey::BbTouch));
    assert!(opportunity.conditions.get(ConditionKey::EmaStack));
    assert_eq!(opportunity.conditions.met_count(), 2);
    assert_eq!(opportunity.indicators.rsi_5m, Some(44.1));

    let positions = update.positions.expect("positions block");
    assert_eq!(positions[0].coin, "ETH");
    assert_eq!(positions[0].status, PositionStatus::Tp1Hit);
    assert!(positions[0].tp1_hit);
    assert_eq!(update.stats.map(|stats| stats.total_trades), Some(10));

    assert_eq!(update.alerts[0].kind, AlertKind::Signal);
    assert_eq!(update.alerts[0].details.as_deref(), Some(r#"{"rsi":28}"#));
}

#[test]
fn entry_level_is_kept_only_within_range() {
    let update = status_from(json!({
        "positions": {
            "active_positions": [
                { "symbol": "ETHUSDT", "entry_level": 2 },
                { "symbol": "SOLUSDT", "entry_level": 7 },
                { "symbol": "XRPUSDT" }
            ]
        }
    }));

    let levels: Vec<Option<u8>> =
        update.positions.expect("positions block").iter().map(|position| position.entry_level).collect();
    assert_eq!(levels, vec![Some(2), None, None]);
}

#[test]
fn sparse_status_payload_still_parses() {
    let update = status_from(json!({ "running": false, "current_scanning": "  " }));

    assert_eq!(update.header.total_symbols, 0);
    assert_eq!(update.current_scanning, None);
    assert!(update.opportunities.is_empty());
    assert_eq!(update.positions, None);
    assert_eq!(update.stats, None);
}

#[test]
fn opportunities_without_symbol_are_dropped() {
    let update = status_from(json!({
        "top_opportunities": [{ "conditions_met": 3 }, { "symbol": "dogeusdt", "conditions_met": 3 }]
    }));
    assert_eq!(update.opportunities.len(), 1);
    assert_eq!(update.opportunities[0].symbol, Symbol::from("DOGEUSDT"));
}

#[test]
fn gainers_fall_back_to_base_asset_for_names() {
    let gainers = serde_json::from_value::<GainersDto>(json!({
        "gainers": [
            { "symbol": "PEPEUSDT", "price": 0.0000123, "change_24h": 31.5, "volume_usdt": 8.1e8, "trades": 99 },
            { "symbol": "WIFUSDT", "coin": "dogwifhat", "price": 2.4 },
            { "price": 1.0 }
        ]
    }))
    .expect("gainers payload")
    .into_domain();

    assert_eq!(gainers.len(), 2);
    assert_eq!(gainers[0].coin, "PEPE");
    assert_eq!(gainers[0].trades, Some(99));
    assert_eq!(gainers[1].coin, "dogwifhat");
}

#[test]
fn action_reply_keeps_test_signal_text() {
    let reply: ActionReply = serde_json::from_value::<ActionDto>(json!({
        "status": "success",
        "message": "Test signal sent",
        "test_signal": { "symbol": "BTCUSDT" }
    }))
    .expect("action payload")
    .into();

    assert!(reply.is_success());
    assert_eq!(reply.test_signal.as_deref(), Some(r#"{"symbol":"BTCUSDT"}"#));

    let bare: ActionReply = serde_json::from_value::<ActionDto>(json!({})).expect("empty payload").into();
    assert!(bare.is_acknowledged());
    assert!(!bare.is_success());
}

#[test]
fn close_request_body_shape() {
    let body = serde_json::to_value(ClosePositionRequest { symbol: "BTCUSDT".to_string() }).expect("body");
    assert_eq!(body, json!({ "symbol": "BTCUSDT" }));
}
