use crate::models::User;
use crate::stats::{DashboardSummary, Mode};

pub fn render_index(summary: &DashboardSummary, user: Option<&User>) -> String {
    let mode = match summary.mode {
        Mode::Remote => "Synced with your wellness account",
        Mode::Standalone => "Saved on this device",
    };
    let greeting = match user {
        Some(user) => format!("Welcome back, {}!", escape_html(&user.username)),
        None if summary.mode == Mode::Remote => "Please login to track your progress!".to_string(),
        None => "Welcome, Wellness Hero!".to_string(),
    };

    INDEX_HTML
        .replace("{{MODE}}", mode)
        .replace("{{GREETING}}", &greeting)
        .replace("{{WATER}}", &summary.water_logged.to_string())
        .replace("{{WATER_GOAL}}", &summary.water_goal.to_string())
        .replace("{{BRUSHING}}", &summary.brushing.to_string())
        .replace("{{BRUSHING_GOAL}}", &summary.brushing_goal.to_string())
        .replace("{{BREATHING}}", &summary.breathing_sessions.to_string())
        .replace("{{HIGH_SCORE}}", &summary.brain_high_score.to_string())
        .replace("{{MOODS}}", &summary.mood_scenarios.to_string())
        .replace("{{AFFIRMATIONS}}", &summary.affirmations.to_string())
        .replace("{{AUTH_HIDDEN}}", if summary.mode == Mode::Remote { "" } else { "hidden" })
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wellness Arcade</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef7f1;
      --bg-2: #b9e4c9;
      --ink: #2b2a28;
      --accent: #2f9e6f;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f4ff 60%, #f4faf6 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .panel,
    .games {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: var(--accent-2);
    }

    button:disabled {
      opacity: 0.45;
      cursor: default;
    }

    .auth {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .auth input {
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 10px 14px;
      font: inherit;
    }

    .screen {
      background: white;
      border-radius: 18px;
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .status {
      min-height: 1.4em;
      font-weight: 500;
    }

    .status[data-kind="error"] {
      color: #c0392b;
    }

    .status[data-kind="success"] {
      color: var(--accent);
    }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Wellness Arcade</h1>
      <p class="subtitle">{{MODE}}</p>
      <p class="subtitle" id="greeting">{{GREETING}}</p>
    </header>

    <section class="auth" {{AUTH_HIDDEN}}>
      <input id="username" placeholder="Username" autocomplete="username" />
      <input id="email" placeholder="Email" autocomplete="email" />
      <input id="password" type="password" placeholder="Password" autocomplete="current-password" />
      <button type="button" data-auth="login">Login</button>
      <button type="button" class="secondary" data-auth="register">Register</button>
      <button type="button" class="secondary" data-auth="logout">Logout</button>
    </section>

    <section class="panel" id="dashboard">
      <div class="stat"><span class="label">Water</span><span class="value" id="water">{{WATER}} / {{WATER_GOAL}}</span></div>
      <div class="stat"><span class="label">Brushing</span><span class="value" id="brushing">{{BRUSHING}} / {{BRUSHING_GOAL}}</span></div>
      <div class="stat"><span class="label">Breathing</span><span class="value" id="breathing">{{BREATHING}}</span></div>
      <div class="stat"><span class="label">Brain best</span><span class="value" id="high-score">{{HIGH_SCORE}}</span></div>
      <div class="stat"><span class="label">Moods</span><span class="value" id="moods">{{MOODS}}</span></div>
      <div class="stat"><span class="label">Affirmations</span><span class="value" id="affirmations">{{AFFIRMATIONS}}</span></div>
    </section>

    <section class="games">
      <button type="button" data-game="hydration">Hydration Hero</button>
      <button type="button" data-game="brushing">Sparkle Smile</button>
      <button type="button" data-game="breathing">Breathe &amp; Balance</button>
      <button type="button" data-game="sprint">Brain Sprint</button>
      <button type="button" data-game="mood">Mood Watch</button>
      <button type="button" data-game="affirmation">Affirmation Builder</button>
    </section>

    <section class="screen" id="screen" hidden>
      <h2 id="screen-title"></h2>
      <pre id="screen-body"></pre>
      <div class="controls" id="controls"></div>
      <button type="button" class="secondary" id="back">Back to dashboard</button>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const screenEl = document.getElementById('screen');
    const dashboardEl = document.getElementById('dashboard');
    const titleEl = document.getElementById('screen-title');
    const bodyEl = document.getElementById('screen-body');
    const controlsEl = document.getElementById('controls');
    let poller = null;

    const ACTIONS = {
      hydration: [['Drink a glass', '/arcade/hydration/log'], ['Reset', '/arcade/hydration/reset']],
      brushing: [
        ['Morning', '/arcade/brushing/log', { session_type: 'morning' }],
        ['Night', '/arcade/brushing/log', { session_type: 'night' }],
        ['Reset', '/arcade/brushing/reset']
      ],
      breathing: [['Start', '/arcade/breathing/start']],
      sprint: [
        ['Start', '/arcade/sprint/start'],
        ['1', '/arcade/sprint/tile', { id: 1 }],
        ['2', '/arcade/sprint/tile', { id: 2 }],
        ['3', '/arcade/sprint/tile', { id: 3 }],
        ['4', '/arcade/sprint/tile', { id: 4 }]
      ],
      mood: [
        ['Next scenario', '/arcade/mood/next'],
        ...['happy', 'sad', 'anxious', 'calm', 'excited', 'frustrated'].map((mood) => [mood, '/arcade/mood/select', { mood }])
      ],
      affirmation: [['Generate', '/arcade/affirmation/generate'], ['Clear', '/arcade/affirmation/clear']]
    };

    const setStatus = (banner) => {
      statusEl.textContent = banner ? banner.message : '';
      statusEl.dataset.kind = banner ? banner.kind : '';
    };

    const call = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body ? JSON.stringify(body) : undefined
      });
      const data = await res.json();
      if (!res.ok) {
        throw new Error(data.detail || 'Request failed');
      }
      return data;
    };

    const render = (frame) => {
      setStatus(frame.banner);
      if (frame.screen === 'dashboard') {
        const s = frame.summary;
        document.getElementById('water').textContent = `${s.water_logged} / ${s.water_goal}`;
        document.getElementById('brushing').textContent = `${s.brushing} / ${s.brushing_goal}`;
        document.getElementById('breathing').textContent = s.breathing_sessions;
        document.getElementById('high-score').textContent = s.brain_high_score;
        document.getElementById('moods').textContent = s.mood_scenarios;
        document.getElementById('affirmations').textContent = s.affirmations;
        screenEl.hidden = true;
        dashboardEl.hidden = false;
        return;
      }
      dashboardEl.hidden = true;
      screenEl.hidden = false;
      titleEl.textContent = frame.title;
      const { screen, title, banner, user, game, ...view } = frame;
      bodyEl.textContent = JSON.stringify(view, null, 2);
      if (controlsEl.dataset.game !== game) {
        controlsEl.dataset.game = game;
        controlsEl.innerHTML = '';
        const actions = [...ACTIONS[game]];
        if (game === 'affirmation') {
          view.words.forEach((choice) => actions.push([choice.word, '/arcade/affirmation/word', { word: choice.word }]));
        }
        actions.forEach(([label, url, body]) => {
          const button = document.createElement('button');
          button.type = 'button';
          button.textContent = label;
          button.addEventListener('click', () => act(url, body));
          controlsEl.appendChild(button);
        });
      }
    };

    const act = (url, body) => call('POST', url, body).then(render).catch((err) => setStatus({ message: err.message, kind: 'error' }));

    const startPolling = () => {
      stopPolling();
      poller = setInterval(() => call('GET', '/arcade/view').then(render).catch(() => {}), 250);
    };

    const stopPolling = () => {
      if (poller) {
        clearInterval(poller);
        poller = null;
      }
    };

    document.querySelectorAll('[data-game]').forEach((button) => {
      button.addEventListener('click', () => {
        controlsEl.dataset.game = '';
        act(`/arcade/games/${button.dataset.game}`).then(startPolling);
      });
    });

    document.getElementById('back').addEventListener('click', () => {
      stopPolling();
      call('GET', '/arcade/dashboard').then(render).catch((err) => setStatus({ message: err.message, kind: 'error' }));
    });

    document.querySelectorAll('[data-auth]').forEach((button) => {
      button.addEventListener('click', () => {
        const body = {
          username: document.getElementById('username').value,
          email: document.getElementById('email').value,
          password: document.getElementById('password').value
        };
        const action = button.dataset.auth;
        act(`/arcade/${action}`, action === 'logout' ? undefined : body).then(() => {
          if (action !== 'register') {
            window.location.reload();
          }
        });
      });
    });
  </script>
</body>
</html>
"#;
