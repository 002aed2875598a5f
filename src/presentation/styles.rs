pub const STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: linear-gradient(135deg, #0f2027 0%, #203a43 50%, #2c5364 100%);
    color: #e8eef2;
    min-height: 100vh;
}

.container { max-width: 1600px; margin: 0 auto; padding: 20px; }

.header {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    background: rgba(255, 255, 255, 0.08);
    backdrop-filter: blur(10px);
    border: 1px solid rgba(255, 255, 255, 0.15);
    border-radius: 15px;
    padding: 20px;
    margin-bottom: 20px;
}

.bot-status { display: flex; align-items: center; gap: 8px; font-weight: 600; }
.status-dot { width: 10px; height: 10px; border-radius: 50%; background: currentColor; }
.status-online { color: #2ecc71; }
.status-offline { color: #e74c3c; }

.controls { display: flex; gap: 8px; flex-wrap: wrap; }
.btn {
    border: none;
    border-radius: 8px;
    padding: 8px 14px;
    font-weight: 600;
    cursor: pointer;
    color: white;
    background: #34495e;
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn.loading { opacity: 0.7; cursor: progress; }
.btn-start { background: #27ae60; }
.btn-stop { background: #c0392b; }
.btn-test { background: #8e44ad; }
.btn-refresh { background: #2980b9; }
.btn-close { background: #c0392b; padding: 4px 10px; font-size: 12px; }

.stats-bar { display: flex; gap: 24px; }
.stat { display: flex; flex-direction: column; align-items: center; }
.stat-value { font-size: 22px; font-weight: 700; color: #72c685; }
.stat-label { font-size: 12px; color: #a0a0a0; }

.main-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 20px; }
@media (max-width: 1100px) { .main-grid { grid-template-columns: 1fr; } }

.panel {
    background: rgba(255, 255, 255, 0.06);
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 12px;
    padding: 16px;
    margin-bottom: 20px;
}
.panel h2 { font-size: 16px; margin-bottom: 12px; }

.filters { display: flex; flex-wrap: wrap; gap: 10px; margin-bottom: 12px; }
.filters input, .filters select {
    background: rgba(0, 0, 0, 0.3);
    color: inherit;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    padding: 8px 12px;
}
.filters input { flex: 1; min-width: 180px; }
.filter-btn {
    background: transparent;
    color: inherit;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 16px;
    padding: 6px 12px;
    cursor: pointer;
}
.filter-btn.active { background: #2980b9; border-color: #2980b9; }

.legend { display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 12px; font-size: 11px; color: #a0a0a0; }

.coins-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px; }
.coin-card {
    background: rgba(0, 0, 0, 0.25);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 10px;
    padding: 12px;
}
.coin-card.scanning { border-color: #f39c12; box-shadow: 0 0 8px rgba(243, 156, 18, 0.4); }
.coin-card.signal { border-color: #2ecc71; box-shadow: 0 0 12px rgba(46, 204, 113, 0.6); }
.coin-header { display: flex; justify-content: space-between; font-weight: 700; }
.coin-price { font-family: 'Courier New', monospace; font-size: 18px; margin: 6px 0; }
.positive { color: #2ecc71; }
.negative { color: #e74c3c; }
.scan-status { font-size: 12px; color: #a0a0a0; }
.scan-status.scanning { color: #f39c12; }
.scan-status.signal { color: #2ecc71; font-weight: 700; }

.indicators { display: flex; flex-wrap: wrap; gap: 4px; margin: 8px 0; }
.indicator {
    font-size: 10px;
    padding: 2px 5px;
    border-radius: 4px;
    background: rgba(231, 76, 60, 0.25);
    color: #e74c3c;
}
.indicator.met { background: rgba(46, 204, 113, 0.25); color: #2ecc71; }

.progress-bar { height: 6px; background: rgba(255, 255, 255, 0.1); border-radius: 3px; overflow: hidden; }
.progress-fill { height: 100%; background: linear-gradient(90deg, #f39c12, #2ecc71); transition: width 0.3s; }
.readings { font-size: 11px; color: #a0a0a0; margin-top: 6px; }
.coin-volume { font-size: 12px; color: #a0a0a0; margin-top: 6px; }
.signal-flag { font-size: 12px; font-weight: 700; color: #2ecc71; margin-top: 6px; }

.position-card {
    background: rgba(0, 0, 0, 0.25);
    border-radius: 8px;
    padding: 10px;
    margin-bottom: 8px;
}
.position-header { display: flex; justify-content: space-between; align-items: center; }
.position-row { display: flex; justify-content: space-between; font-size: 12px; margin-top: 4px; }
.status-badge { font-size: 10px; padding: 2px 6px; border-radius: 4px; background: rgba(255, 255, 255, 0.1); }
.status-active { color: #3498db; }
.status-profit { color: #2ecc71; }
.status-loss { color: #e74c3c; }
.status-closed { color: #95a5a6; }

.stats-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 6px; font-size: 13px; }
.stats-grid .stat-row { display: flex; justify-content: space-between; }

.signals-list { max-height: 400px; overflow-y: auto; }
.signal-item { border-left: 3px solid #95a5a6; padding: 6px 10px; margin-bottom: 6px; font-size: 12px; }
.signal-item.alert-signal { border-color: #2ecc71; }
.signal-item.alert-test { border-color: #8e44ad; }
.signal-item.alert-info { border-color: #3498db; }
.signal-time { color: #a0a0a0; font-size: 11px; }
.signal-details { color: #a0a0a0; font-size: 11px; white-space: pre-wrap; }

.placeholder { text-align: center; color: #a0a0a0; padding: 24px; }
.placeholder.error { color: #e74c3c; }
.placeholder.scanning { color: #f39c12; }
.current-scan-title { font-weight: 700; color: #f39c12; margin-bottom: 8px; }
.entry-level { font-size: 10px; padding: 2px 6px; border-radius: 4px; background: rgba(52, 152, 219, 0.3); }

.notification {
    position: fixed;
    top: 20px;
    right: 20px;
    padding: 12px 18px;
    border-radius: 8px;
    font-weight: 600;
    opacity: 0;
    transform: translateY(-10px);
    transition: opacity 0.3s, transform 0.3s;
    pointer-events: none;
}
.notification.show { opacity: 1; transform: translateY(0); }
.notification.success { background: #27ae60; }
.notification.error { background: #c0392b; }
.notification.info { background: #2980b9; }
"#;
