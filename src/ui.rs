use crate::models::{Frequency, HabitView, HabitsResponse, StatsResponse};
use crate::seed::suggestions;
use crate::validation::{can_submit, MAX_NAME_CHARS};
use chrono::NaiveDate;
use std::time::Duration;

/// State of the add form for one render.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub name: String,
    pub frequency: Frequency,
    pub error: Option<String>,
    pub notice: bool,
}

pub fn render_index(
    today: NaiveDate,
    snapshot: &HabitsResponse,
    stats: &StatsResponse,
    form: &FormView,
    notice_duration: Duration,
) -> String {
    let submit_disabled = form.error.is_some() || !can_submit(&form.name, false);
    INDEX_HTML
        .replace("{{TODAY}}", &today.to_string())
        .replace("{{NAME}}", &escape_html(&form.name))
        .replace("{{NAME_LEN}}", &form.name.chars().count().to_string())
        .replace("{{MAX_LEN}}", &MAX_NAME_CHARS.to_string())
        .replace("{{NAME_HELP}}", &name_help(form))
        .replace("{{NAME_INVALID}}", if form.error.is_some() { "invalid" } else { "" })
        .replace("{{DAILY_SELECTED}}", selected(form.frequency == Frequency::Daily))
        .replace("{{WEEKLY_SELECTED}}", selected(form.frequency == Frequency::Weekly))
        .replace("{{SUBMIT_DISABLED}}", if submit_disabled { "disabled" } else { "" })
        .replace("{{SUGGESTIONS}}", &render_suggestions())
        .replace("{{NOTICE}}", &render_notice(form.notice))
        .replace("{{NOTICE_MS}}", &notice_duration.as_millis().to_string())
        .replace("{{LIST}}", &render_list(snapshot))
        .replace("{{STATS}}", &render_stats(snapshot, stats))
        .replace("{{LOADING}}", if snapshot.is_loading { "true" } else { "false" })
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

fn selected(flag: bool) -> &'static str {
    if flag { "selected" } else { "" }
}

fn name_help(form: &FormView) -> String {
    match &form.error {
        Some(message) => escape_html(message),
        None => "Give your habit a clear, specific name".to_string(),
    }
}

fn render_notice(show: bool) -> String {
    if !show {
        return String::new();
    }
    r#"<div class="notice" id="notice" role="status">Habit added successfully! Keep it up!</div>"#
        .to_string()
}

fn render_suggestions() -> String {
    let mut html = String::new();
    for frequency in [Frequency::Daily, Frequency::Weekly] {
        html.push_str(&format!(
            r#"<div class="chips" data-frequency="{frequency}"><p class="chips-title">Popular {frequency} habits:</p>"#
        ));
        for suggestion in suggestions(frequency) {
            let text = escape_html(suggestion);
            html.push_str(&format!(
                r#"<button class="chip" type="button" data-suggestion="{text}">{text}</button>"#
            ));
        }
        html.push_str("</div>");
    }
    html
}

fn render_list(snapshot: &HabitsResponse) -> String {
    if snapshot.is_loading {
        return r#"<p class="placeholder">Loading habits...</p>"#.to_string();
    }
    if snapshot.habits.is_empty() {
        return r#"<p class="placeholder info">No habits found. Start by adding your first habit!</p>"#
            .to_string();
    }

    let mut html = String::new();
    for view in &snapshot.habits {
        render_card(&mut html, view);
    }
    html
}

fn render_card(html: &mut String, view: &HabitView) {
    let habit = &view.habit;
    let id = escape_html(&habit.id);
    let name = escape_html(&habit.name);
    let done_class = if view.completed_today { " done" } else { "" };
    let done_mark = if view.completed_today {
        r#"<span class="mark">Completed today</span>"#
    } else {
        ""
    };
    let toggle_label = if view.completed_today { "Completed" } else { "Mark Complete" };
    let plural = if view.streak == 1 { "" } else { "s" };

    html.push_str(&format!(
        r#"<article class="habit{done_class}">
  <div class="habit-info">
    <h3>{name}</h3>{done_mark}
    <div class="meta">
      <span class="freq">{frequency}</span>
      <span class="streak">{streak} day{plural} streak</span>
    </div>
    <div class="progress" aria-label="Progress"><span style="width: {percent:.0}%"></span></div>
    <span class="percent">{percent:.0}% complete</span>
  </div>
  <div class="habit-actions">
    <form method="post" action="/habits/{id}/toggle">
      <button class="btn-toggle{done_class}" type="submit">{toggle_label}</button>
    </form>
    <form method="post" action="/habits/{id}/delete" class="delete-form" data-name="{name}">
      <button class="btn-delete" type="submit" aria-label="Delete habit">Delete</button>
    </form>
  </div>
</article>
"#,
        frequency = habit.frequency,
        streak = view.streak,
        percent = view.completion_percentage,
    ));
}

fn render_stats(snapshot: &HabitsResponse, stats: &StatsResponse) -> String {
    if snapshot.is_loading {
        return r#"<div class="progress indeterminate"><span></span></div>"#.to_string();
    }
    if let Some(error) = &snapshot.error {
        return format!(r#"<p class="error">Error: {}</p>"#, escape_html(error));
    }
    format!(
        r#"<div class="stat"><span class="label">Total Habits</span><span class="value" id="total">{}</span></div>
<div class="stat"><span class="label">Completed Today</span><span class="value" id="completed">{}</span></div>
<div class="stat"><span class="label">Longest Streak</span><span class="value" id="longest">{}</span></div>"#,
        stats.total_habits, stats.completed_today, stats.longest_streak
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #f4f7fb;
      --ink: #1f2a37;
      --muted: #6b7280;
      --accent: #2196f3;
      --accent-2: #21cbf3;
      --ok: #4caf50;
      --danger: #d64545;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(33, 150, 243, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #eef4ff 60%, #f8f9ff 100%);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      display: grid;
      gap: 28px;
    }

    header {
      text-align: center;
    }

    h1 {
      margin: 0 0 6px;
      font-size: clamp(2rem, 4vw, 2.6rem);
      background: linear-gradient(45deg, var(--accent) 30%, var(--accent-2) 90%);
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 28px;
    }

    form.add {
      display: grid;
      gap: 14px;
    }

    label {
      font-weight: 600;
    }

    input[type="text"], select {
      width: 100%;
      padding: 12px 14px;
      border-radius: 10px;
      border: 1px solid #cfd8e3;
      font-size: 1rem;
    }

    input.invalid {
      border-color: var(--danger);
    }

    .help {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .help.invalid {
      color: var(--danger);
    }

    .row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
    }

    button:disabled {
      background: #e0e0e0;
      color: #9e9e9e;
      cursor: not-allowed;
    }

    .btn-add {
      background: linear-gradient(45deg, var(--accent) 30%, var(--accent-2) 90%);
      color: white;
    }

    .btn-link {
      background: transparent;
      color: var(--accent);
      padding: 4px 0;
    }

    .chips {
      display: none;
      flex-wrap: wrap;
      gap: 8px;
      padding: 12px;
      border-radius: 10px;
      background: rgba(33, 150, 243, 0.04);
    }

    .chips.visible {
      display: flex;
    }

    .chips-title {
      width: 100%;
      margin: 0;
      color: var(--accent);
      font-weight: 600;
    }

    .chip {
      border: 1px solid var(--accent);
      background: white;
      color: var(--accent);
      border-radius: 999px;
      padding: 6px 12px;
      font-size: 0.85rem;
    }

    .notice {
      padding: 12px 16px;
      border-radius: 10px;
      background: #e8f5e9;
      color: #2e7d32;
      font-weight: 600;
    }

    .list {
      display: grid;
      gap: 18px;
    }

    .habit {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      gap: 16px;
      background: var(--card);
      border-radius: 16px;
      border: 1px solid #e0e0e0;
      padding: 20px;
    }

    .habit.done {
      border: 2px solid var(--ok);
    }

    .habit h3 {
      display: inline;
      margin: 0 8px 0 0;
    }

    .habit.done h3, .mark {
      color: var(--ok);
    }

    .meta {
      display: flex;
      gap: 10px;
      margin: 10px 0;
      font-size: 0.9rem;
    }

    .freq {
      border-radius: 999px;
      padding: 2px 10px;
      background: rgba(33, 150, 243, 0.1);
      color: var(--accent);
      text-transform: capitalize;
    }

    .streak {
      color: #ef6c00;
    }

    .progress {
      height: 8px;
      width: min(320px, 100%);
      border-radius: 999px;
      background: #e3eaf3;
      overflow: hidden;
    }

    .progress span {
      display: block;
      height: 100%;
      background: var(--ok);
    }

    .progress.indeterminate span {
      width: 40%;
      background: var(--accent);
      animation: slide 1.2s ease-in-out infinite;
    }

    .percent {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .habit-actions {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .btn-toggle {
      border: 1px solid var(--ok);
      background: white;
      color: var(--ok);
    }

    .btn-toggle.done {
      background: var(--ok);
      color: white;
    }

    .btn-delete {
      background: transparent;
      color: var(--danger);
    }

    .placeholder {
      text-align: center;
      color: var(--muted);
    }

    .placeholder.info {
      padding: 14px;
      border-radius: 10px;
      background: #e3f2fd;
      color: #0d47a1;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .error {
      color: var(--danger);
    }

    @keyframes slide {
      from {
        transform: translateX(-100%);
      }
      to {
        transform: translateX(250%);
      }
    }

    @media (max-width: 600px) {
      .card {
        padding: 20px 16px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Build Better Habits</h1>
      <p class="subtitle">Start your journey to a better you, one habit at a time. Today is {{TODAY}}.</p>
    </header>

    {{NOTICE}}

    <section class="card">
      <form class="add" id="add-form" method="post" action="/habits" novalidate>
        <label for="name">Habit Name</label>
        <input type="text" id="name" name="name" value="{{NAME}}" class="{{NAME_INVALID}}"
          placeholder="e.g., Drink 8 glasses of water" autocomplete="off" autofocus />
        <span class="help {{NAME_INVALID}}" id="name-help">{{NAME_HELP}}</span>
        <div class="row">
          <button class="btn-link" type="button" id="suggest-btn">Need inspiration?</button>
          <span class="help"><span id="name-len">{{NAME_LEN}}</span>/{{MAX_LEN}} characters</span>
        </div>
        <div id="suggestions">{{SUGGESTIONS}}</div>
        <label for="frequency">Frequency</label>
        <select id="frequency" name="frequency">
          <option value="daily" {{DAILY_SELECTED}}>Daily (every day)</option>
          <option value="weekly" {{WEEKLY_SELECTED}}>Weekly (once a week)</option>
        </select>
        <span class="help">Choose how often you want to perform this habit</span>
        <button class="btn-add" id="add-btn" type="submit" {{SUBMIT_DISABLED}}>Add Habit</button>
      </form>
    </section>

    <section class="list" id="list">
      {{LIST}}
    </section>

    <section class="card">
      <h2>Habit Stats</h2>
      <div class="stats">
        {{STATS}}
      </div>
    </section>
  </main>

  <script>
    const MIN_LEN = 3;
    const MAX_LEN = {{MAX_LEN}};
    const NOTICE_MS = {{NOTICE_MS}};
    const LOADING = {{LOADING}};

    const form = document.getElementById('add-form');
    const nameEl = document.getElementById('name');
    const helpEl = document.getElementById('name-help');
    const lenEl = document.getElementById('name-len');
    const addBtn = document.getElementById('add-btn');
    const suggestBtn = document.getElementById('suggest-btn');
    const frequencyEl = document.getElementById('frequency');
    const defaultHelp = 'Give your habit a clear, specific name';

    let submitting = false;
    let showSuggestions = false;

    const validateName = (value) => {
      const trimmed = value.trim();
      const length = Array.from(trimmed).length;
      if (!length) {
        return 'Habit name is required';
      }
      if (length < MIN_LEN) {
        return 'Habit name must be at least 3 characters';
      }
      if (length > MAX_LEN) {
        return 'Habit name must be at most 50 characters';
      }
      return '';
    };

    const setError = (message) => {
      helpEl.textContent = message || defaultHelp;
      helpEl.classList.toggle('invalid', Boolean(message));
      nameEl.classList.toggle('invalid', Boolean(message));
      addBtn.disabled = submitting || Boolean(message) || !nameEl.value.trim();
    };

    const renderSuggestions = () => {
      document.querySelectorAll('.chips').forEach((group) => {
        const visible = showSuggestions && group.dataset.frequency === frequencyEl.value;
        group.classList.toggle('visible', visible);
      });
      suggestBtn.textContent = showSuggestions ? 'Hide suggestions' : 'Need inspiration?';
    };

    nameEl.addEventListener('input', () => {
      lenEl.textContent = Array.from(nameEl.value).length;
      setError(validateName(nameEl.value));
    });

    suggestBtn.addEventListener('click', () => {
      showSuggestions = !showSuggestions;
      renderSuggestions();
    });

    frequencyEl.addEventListener('change', renderSuggestions);

    document.querySelectorAll('.chip').forEach((chip) => {
      chip.addEventListener('click', () => {
        nameEl.value = chip.dataset.suggestion;
        lenEl.textContent = Array.from(nameEl.value).length;
        setError('');
        showSuggestions = false;
        renderSuggestions();
        nameEl.focus();
      });
    });

    form.addEventListener('submit', (event) => {
      const message = validateName(nameEl.value);
      if (message || submitting) {
        event.preventDefault();
        setError(message);
        nameEl.focus();
        return;
      }
      submitting = true;
      addBtn.disabled = true;
      addBtn.textContent = 'Adding Habit...';
    });

    document.querySelectorAll('.delete-form').forEach((deleteForm) => {
      deleteForm.addEventListener('submit', (event) => {
        const question = `Are you sure you want to delete "${deleteForm.dataset.name}"? This action cannot be undone.`;
        if (!window.confirm(question)) {
          event.preventDefault();
        }
      });
    });

    const notice = document.getElementById('notice');
    if (notice) {
      history.replaceState(null, '', '/');
      setTimeout(() => notice.remove(), NOTICE_MS);
    }

    if (LOADING) {
      setTimeout(() => location.reload(), 500);
    }
  </script>
</body>
</html>
"#;
