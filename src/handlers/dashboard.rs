//! GET /
//!
//! Dashboard de itens: busca `/myob/items` ao carregar (e no botão Refresh)
//! e filtra por nome ou número no próprio navegador.

use axum::response::Html;

use crate::utils::logging::*;

pub async fn dashboard() -> Html<&'static str> {
    log_request_received("/", "GET");
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>MYOB Items Dashboard</title>
    <meta charset="UTF-8">
    <meta name="description" content="View all items from MYOB Advanced Business">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
               background: #f8fafc; color: #1e293b; }
        header { background: #1e293b; color: white; padding: 2rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
        header h1 { margin: 0 0 0.5rem 0; font-size: 2rem; }
        header p { margin: 0; opacity: 0.9; font-size: 0.95rem; }
        .wrap { max-width: 1200px; margin: 0 auto; }
        main { padding: 2rem 1rem; }
        .controls { display: flex; gap: 1rem; margin-bottom: 2rem; flex-wrap: wrap; }
        #search { flex: 1; min-width: 250px; padding: 0.75rem 1rem; border: 1px solid #e2e8f0;
                  border-radius: 0.5rem; font-size: 1rem; font-family: inherit; }
        #refresh { padding: 0.75rem 1.5rem; background: #3b82f6; color: white; border: none;
                   border-radius: 0.5rem; cursor: pointer; font-size: 1rem; font-weight: 500; }
        #refresh:hover { background: #2563eb; }
        #refresh:disabled { background: #cbd5e1; cursor: not-allowed; }
        .error { background: #fee2e2; border: 1px solid #fca5a5; color: #991b1b;
                 padding: 1rem; border-radius: 0.5rem; margin-bottom: 1.5rem; }
        .status { text-align: center; padding: 3rem; color: #64748b; }
        .count { margin-bottom: 1.5rem; color: #475569; font-size: 1.1rem; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
        .card { background: white; border: 1px solid #e2e8f0; border-radius: 0.75rem; padding: 1.5rem;
                box-shadow: 0 1px 2px rgba(0,0,0,0.05); transition: box-shadow 0.2s, transform 0.2s; }
        .card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); transform: translateY(-2px); }
        .card-head { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
        .card h3 { margin: 0 0 0.25rem 0; font-size: 1.1rem; }
        .number { margin: 0; color: #64748b; font-size: 0.85rem; font-family: 'Courier New', monospace; }
        .price { font-size: 1.25rem; font-weight: bold; color: #059669; white-space: nowrap; }
        .description { margin: 1rem 0 0 0; color: #475569; font-size: 0.95rem; line-height: 1.5; }
        footer { text-align: center; padding: 2rem; color: #64748b; border-top: 1px solid #e2e8f0; }
        footer p { margin: 0; font-size: 0.9rem; }
    </style>
</head>
<body>
    <header>
        <div class="wrap">
            <h1>MYOB Items Dashboard</h1>
            <p>Real-time inventory sync</p>
        </div>
    </header>

    <main class="wrap">
        <div class="controls">
            <input id="search" type="text" placeholder="Search items by name or number...">
            <button id="refresh">Refresh</button>
        </div>
        <div id="error" class="error" hidden></div>
        <div id="status" class="status" hidden></div>
        <div id="count" class="count" hidden></div>
        <div id="grid" class="grid"></div>
    </main>

    <footer>
        <p>Last updated: <span id="updated">Loading...</span></p>
    </footer>

    <script>
        const state = { items: [], loading: false, error: null, term: '' };
        const $ = (id) => document.getElementById(id);

        function escapeHtml(value) {
            return String(value).replace(/[&<>"']/g, (c) => ({
                '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
            }[c]));
        }

        function formatPrice(price) {
            return typeof price === 'number' ? price.toFixed(2) : escapeHtml(price);
        }

        function filtered() {
            const term = state.term.toLowerCase();
            return state.items.filter((item) =>
                item.name.toLowerCase().includes(term) ||
                item.number.toLowerCase().includes(term)
            );
        }

        function render() {
            const visible = filtered();

            $('refresh').disabled = state.loading;
            $('refresh').textContent = state.loading ? 'Loading...' : 'Refresh';

            $('error').hidden = !state.error;
            $('error').innerHTML = state.error ? '<strong>Error:</strong> ' + escapeHtml(state.error) : '';

            $('count').hidden = state.loading;
            $('count').innerHTML = '<strong>' + visible.length + ' of ' + state.items.length + ' items' +
                (state.term ? ' matching "' + escapeHtml(state.term) + '"' : '') + '</strong>';

            const status = $('status');
            if (state.loading && !state.items.length) {
                status.hidden = false;
                status.textContent = 'Loading items...';
            } else if (!state.loading && !visible.length) {
                status.hidden = false;
                status.textContent = state.term ? 'No items match your search' : 'No items found';
            } else {
                status.hidden = true;
            }

            $('grid').innerHTML = visible.map((item) =>
                '<div class="card">' +
                    '<div class="card-head">' +
                        '<div>' +
                            '<h3>' + escapeHtml(item.name) + '</h3>' +
                            '<p class="number">Item #' + escapeHtml(item.number) + '</p>' +
                        '</div>' +
                        '<div class="price">$' + formatPrice(item.price) + '</div>' +
                    '</div>' +
                    (item.description ? '<p class="description">' + escapeHtml(item.description) + '</p>' : '') +
                '</div>'
            ).join('');
        }

        async function fetchItems() {
            state.loading = true;
            render();
            try {
                const response = await fetch('/myob/items');
                const data = await response.json().catch(() => ({}));
                if (data.success) {
                    state.items = data.data;
                    state.error = null;
                } else if (!response.ok) {
                    state.error = data.error || ('API error: ' + response.status);
                } else {
                    state.error = data.error || 'Failed to fetch items';
                }
            } catch (err) {
                state.error = err.message;
                console.error('Fetch error:', err);
            } finally {
                state.loading = false;
                $('updated').textContent = new Date().toLocaleString();
                render();
            }
        }

        $('search').addEventListener('input', (e) => { state.term = e.target.value; render(); });
        $('refresh').addEventListener('click', fetchItems);
        fetchItems();
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_fetches_items_endpoint() {
        let Html(page) = dashboard().await;

        assert!(page.contains("MYOB Items Dashboard"));
        assert!(page.contains("fetch('/myob/items')"));
        assert!(page.contains("escapeHtml"));
    }
}
