use crate::models::DaySummary;
use chrono::NaiveDate;

pub fn render_index(summary: &DaySummary, min_date: NaiveDate, today: NaiveDate) -> String {
    let status = if summary.dominant.is_some() { "ok" } else { "empty" };
    INDEX_HTML
        .replace("{{DATE}}", &summary.date.to_string())
        .replace("{{MIN_DATE}}", &min_date.to_string())
        .replace("{{TODAY}}", &today.to_string())
        .replace("{{HAPPY}}", &summary.counts.happy.to_string())
        .replace("{{SAD}}", &summary.counts.sad.to_string())
        .replace("{{NEUTRAL}}", &summary.counts.neutral.to_string())
        .replace("{{SUMMARY_TYPE}}", status)
        .replace("{{SUMMARY}}", &summary.message)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Metrics</title>
  <style>
    :root {
      --bg: #1e1e1e;
      --card: #252525;
      --ink: #ffffff;
      --muted: #b7b2ab;
      --button: linear-gradient(to right, #ff7e5f, #feb47b);
      --happy: #90ee90;
      --sad: #f08080;
      --neutral: #87cefa;
    }

    body.light {
      --bg: #ffffff;
      --card: #f0f0f0;
      --ink: #000000;
      --muted: #5f5c57;
      --button: linear-gradient(to right, #4facfe, #00f2fe);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      display: grid;
      gap: 24px;
    }

    header {
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 2.8rem);
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 8px;
      justify-content: center;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 20px;
      display: grid;
      gap: 14px;
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 20px;
    }

    textarea,
    input[type="date"] {
      width: 100%;
      border-radius: 10px;
      border: 1px solid rgba(127, 127, 127, 0.4);
      padding: 10px;
      font: inherit;
      background: transparent;
      color: var(--ink);
    }

    button {
      border: none;
      border-radius: 8px;
      padding: 0.5rem 1rem;
      font-size: 1rem;
      font-weight: bold;
      cursor: pointer;
      background: var(--button);
      color: white;
    }

    button.secondary {
      background: transparent;
      color: var(--ink);
      border: 1px solid rgba(127, 127, 127, 0.4);
    }

    .result {
      font-size: 1.6rem;
      font-weight: bold;
      text-align: center;
      min-height: 1.2em;
    }

    .bars {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      align-items: end;
      gap: 16px;
      height: 220px;
    }

    .bar {
      display: grid;
      align-content: end;
      gap: 6px;
      text-align: center;
      height: 100%;
    }

    .bar .fill {
      border-radius: 8px 8px 0 0;
      min-height: 2px;
      transition: height 200ms ease;
    }

    .bar[data-label="Happy"] .fill { background: var(--happy); }
    .bar[data-label="Sad"] .fill { background: var(--sad); }
    .bar[data-label="Neutral"] .fill { background: var(--neutral); }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] { color: #ff6b5b; }
    .status[data-type="ok"] { color: #5fd38d; }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Metrics</h1>
      <p class="subtitle">Turning your feelings into insights</p>
    </header>

    <nav class="tabs">
      <button class="secondary" data-tab="home" type="button">Home</button>
      <button class="secondary" data-tab="donate" type="button">Data Donation</button>
      <button class="secondary" id="theme-toggle" type="button">Toggle Theme</button>
    </nav>

    <section id="tab-home" class="card">
      <form id="date-form" method="get" action="/">
        <label for="date">Select Date</label>
        <input id="date" name="date" type="date" min="{{MIN_DATE}}" max="{{TODAY}}" value="{{DATE}}" />
      </form>

      <div class="columns">
        <form id="analyze-form" class="card" method="post" action="/analyze">
          <h3>Enter Text Below:</h3>
          <input type="hidden" name="date" value="{{DATE}}" />
          <textarea id="text" name="text" rows="6"></textarea>
          <button type="submit">Analyze Sentiment</button>
          <div class="result" id="result"></div>
        </form>

        <div class="card">
          <h3>Mood Chart</h3>
          <div class="bars" id="bars">
            <div class="bar" data-label="Happy" data-count="{{HAPPY}}"><div class="fill"></div><span>Happy {{HAPPY}}</span></div>
            <div class="bar" data-label="Sad" data-count="{{SAD}}"><div class="fill"></div><span>Sad {{SAD}}</span></div>
            <div class="bar" data-label="Neutral" data-count="{{NEUTRAL}}"><div class="fill"></div><span>Neutral {{NEUTRAL}}</span></div>
          </div>
        </div>
      </div>

      <div class="card">
        <h3>Mood Booster</h3>
        <button type="button" id="cheer">Cheer Me Up!</button>
        <div class="status" id="cheer-message"></div>
      </div>

      <div class="card">
        <h3>Record Your Sentiment for the Day</h3>
        <div class="status" id="summary" data-type="{{SUMMARY_TYPE}}">{{SUMMARY}}</div>
      </div>
    </section>

    <section id="tab-donate" class="card" hidden>
      <h2>Data Donation</h2>
      <p class="subtitle">Entries submitted here may be read by developers to improve the model, but they remain strictly confidential and are never shared publicly.</p>
      <form id="donate-form">
        <textarea id="donation" rows="8" placeholder="Share your mood entry to help improve Mood Metrics (optional)"></textarea>
        <button type="submit">Donate My Entry</button>
      </form>
      <div class="status" id="donate-status"></div>
    </section>
  </main>

  <script>
    const dateInput = document.getElementById('date');
    const resultEl = document.getElementById('result');
    const summaryEl = document.getElementById('summary');
    const donateStatus = document.getElementById('donate-status');
    const labels = ['Happy', 'Sad', 'Neutral'];
    const emoji = { Happy: '😊', Sad: '😢', Neutral: '😐' };

    const setStatus = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const renderBars = (counts) => {
      const max = Math.max(1, ...labels.map((label) => counts[label]));
      labels.forEach((label) => {
        const bar = document.querySelector(`.bar[data-label="${label}"]`);
        bar.dataset.count = counts[label];
        bar.querySelector('.fill').style.height = `${(counts[label] / max) * 180}px`;
        bar.querySelector('span').textContent = `${label} ${counts[label]}`;
      });
    };

    const renderSummary = (summary) => {
      renderBars(summary.counts);
      setStatus(summaryEl, summary.message, summary.dominant ? 'ok' : 'empty');
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    dateInput.addEventListener('change', () => {
      document.getElementById('date-form').submit();
    });

    document.getElementById('analyze-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = document.getElementById('text').value;
      postJson('/api/analyze', { text, date: dateInput.value })
        .then((data) => {
          setStatus(resultEl, `Sentiment: ${data.sentiment} ${emoji[data.sentiment]}`, 'ok');
          renderSummary(data.summary);
        })
        .catch((err) => setStatus(resultEl, err.message, 'error'));
    });

    document.getElementById('donate-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = document.getElementById('donation').value;
      postJson('/api/donate', { text })
        .then((data) => {
          document.getElementById('donation').value = '';
          setStatus(donateStatus, data.message, 'ok');
        })
        .catch((err) => setStatus(donateStatus, err.message, 'error'));
    });

    document.getElementById('cheer').addEventListener('click', () => {
      fetch('/api/cheer')
        .then((res) => res.json())
        .then((data) => setStatus(document.getElementById('cheer-message'), data.message, 'ok'))
        .catch((err) => setStatus(document.getElementById('cheer-message'), err.message, 'error'));
    });

    document.querySelectorAll('[data-tab]').forEach((button) => {
      button.addEventListener('click', () => {
        document.getElementById('tab-home').hidden = button.dataset.tab !== 'home';
        document.getElementById('tab-donate').hidden = button.dataset.tab !== 'donate';
      });
    });

    const applyTheme = (theme) => {
      document.body.classList.toggle('light', theme === 'light');
    };
    applyTheme(localStorage.getItem('theme') || 'dark');
    document.getElementById('theme-toggle').addEventListener('click', () => {
      const next = document.body.classList.contains('light') ? 'dark' : 'light';
      localStorage.setItem('theme', next);
      applyTheme(next);
    });

    renderBars(Object.fromEntries(
      labels.map((label) => [label, Number(document.querySelector(`.bar[data-label="${label}"]`).dataset.count)])
    ));
  </script>
</body>
</html>
"#;
