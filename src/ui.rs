pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ee;
      --bg-2: #cfe3cf;
      --ink: #243028;
      --accent: #2f855a;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f0e0 60%, #f2f7ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
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
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6a5e;
      font-size: 1rem;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .overview-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .overview-head {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    .overall-streak {
      font-weight: 600;
      color: var(--accent);
    }

    .day-strip {
      display: grid;
      grid-template-columns: repeat(14, 1fr);
      gap: 6px;
      margin-top: 14px;
    }

    .day-cell {
      display: grid;
      gap: 2px;
      justify-items: center;
      padding: 8px 2px;
      border-radius: 12px;
      background: rgba(47, 72, 88, 0.05);
      font-size: 0.75rem;
      color: #6b7a6e;
    }

    .day-cell .num {
      font-weight: 600;
      font-size: 0.95rem;
      color: var(--accent-2);
    }

    .day-cell .count {
      font-weight: 600;
      color: #9aa79c;
    }

    .day-cell.done {
      background: rgba(47, 133, 90, 0.14);
    }

    .day-cell.done .count {
      color: var(--accent);
    }

    .day-cell.today {
      outline: 2px solid var(--accent);
    }

    form.new-habit {
      display: grid;
      gap: 12px;
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    input[type="text"],
    textarea {
      width: 100%;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
      color: var(--ink);
    }

    textarea {
      resize: vertical;
      min-height: 60px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 133, 90, 0.3);
      justify-self: start;
    }

    .btn-quiet {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: var(--danger);
      color: white;
    }

    .habit-list {
      display: grid;
      gap: 14px;
    }

    .habit-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .habit-card.done {
      border-color: rgba(47, 133, 90, 0.4);
    }

    .habit-head {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: baseline;
      gap: 8px;
    }

    .habit-head h3 {
      margin: 0;
      font-size: 1.2rem;
    }

    .habit-desc {
      margin: 0;
      color: #5c6a5e;
      font-size: 0.95rem;
    }

    .habit-stats {
      display: flex;
      flex-wrap: wrap;
      gap: 16px;
      font-size: 0.85rem;
      color: #6b7a6e;
    }

    .habit-stats strong {
      color: var(--accent-2);
      font-size: 1rem;
    }

    .habit-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .edit-form {
      display: grid;
      gap: 10px;
    }

    .badge {
      font-size: 0.75rem;
      font-weight: 600;
      color: var(--accent);
    }

    .empty {
      color: #6b7a6e;
      font-size: 0.95rem;
      margin: 0;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .day-strip {
        grid-template-columns: repeat(7, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Today is {{DATE}}. Mark your habits done and keep the streaks alive.</p>
    </header>

    <section class="overview-card">
      <div class="overview-head">
        <h2>Last 14 days</h2>
        <span class="overall-streak" id="overall-streak"></span>
      </div>
      <div class="day-strip" id="day-strip"></div>
    </section>

    <form class="new-habit" id="new-habit-form">
      <h2>New habit</h2>
      <input type="text" id="new-title" placeholder="Title" maxlength="200" />
      <textarea id="new-description" placeholder="Description (optional)"></textarea>
      <button class="btn-primary" type="submit">Add habit</button>
    </form>

    <section>
      <h2>Habits</h2>
      <div class="habit-list" id="habit-list"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const dayStripEl = document.getElementById('day-strip');
    const overallStreakEl = document.getElementById('overall-streak');
    const habitListEl = document.getElementById('habit-list');
    const newHabitForm = document.getElementById('new-habit-form');
    const newTitleEl = document.getElementById('new-title');
    const newDescriptionEl = document.getElementById('new-description');

    let editingId = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flash = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1800);
    };

    const escapeHtml = (value) =>
      String(value == null ? '' : value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const formatFieldErrors = (errors) =>
      Object.entries(errors)
        .map(([field, messages]) => field + ' ' + messages.join(', '))
        .join('; ');

    const request = async (path, options) => {
      const res = await fetch(path, options);
      const text = await res.text();
      let body = null;
      try {
        body = text ? JSON.parse(text) : null;
      } catch (_) {
        body = null;
      }
      if (!res.ok) {
        if (body && body.errors) {
          throw new Error(formatFieldErrors(body.errors));
        }
        throw new Error(text || 'Request failed');
      }
      return body;
    };

    const jsonOptions = (method, payload) => ({
      method,
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(payload)
    });

    const renderOverview = (overview) => {
      const days = overview.current_streak === 1 ? 'day' : 'days';
      overallStreakEl.textContent = overview.current_streak + ' ' + days + ' streak';
      dayStripEl.innerHTML = overview.dates
        .map((day) => {
          const classes = ['day-cell'];
          if (day.habits_completed > 0) classes.push('done');
          if (day.is_today) classes.push('today');
          return (
            '<div class="' + classes.join(' ') + '">' +
            '<span>' + escapeHtml(day.day_name) + '</span>' +
            '<span class="num">' + day.day_number + '</span>' +
            '<span class="count">' + day.habits_completed + '</span>' +
            '</div>'
          );
        })
        .join('');
    };

    const habitCard = (habit) => {
      if (habit.id === editingId) {
        return (
          '<div class="habit-card" data-id="' + habit.id + '">' +
          '<form class="edit-form" data-action="save">' +
          '<input type="text" name="title" value="' + escapeHtml(habit.title) + '" />' +
          '<textarea name="description">' + escapeHtml(habit.description) + '</textarea>' +
          '<div class="habit-actions">' +
          '<button class="btn-primary" type="submit">Save</button>' +
          '<button class="btn-quiet" type="button" data-action="cancel">Cancel</button>' +
          '</div>' +
          '</form>' +
          '</div>'
        );
      }

      const toggleLabel = habit.completed_today ? 'Undo today' : 'Complete today';
      const toggleAction = habit.completed_today ? 'uncomplete' : 'complete';
      const doneBadge = habit.completed_today ? '<span class="badge">Done today</span>' : '';
      const description = habit.description
        ? '<p class="habit-desc">' + escapeHtml(habit.description) + '</p>'
        : '';

      return (
        '<div class="habit-card' + (habit.completed_today ? ' done' : '') + '" data-id="' + habit.id + '">' +
        '<div class="habit-head"><h3>' + escapeHtml(habit.title) + '</h3>' + doneBadge + '</div>' +
        description +
        '<div class="habit-stats">' +
        '<span>Current streak <strong>' + habit.current_streak + '</strong></span>' +
        '<span>Longest streak <strong>' + habit.longest_streak + '</strong></span>' +
        '<span>Total <strong>' + habit.total_completions + '</strong></span>' +
        '</div>' +
        '<div class="habit-actions">' +
        '<button class="btn-primary" type="button" data-action="' + toggleAction + '">' + toggleLabel + '</button>' +
        '<button class="btn-quiet" type="button" data-action="edit">Edit</button>' +
        '<button class="btn-danger" type="button" data-action="delete">Delete</button>' +
        '</div>' +
        '</div>'
      );
    };

    const renderHabits = (habits) => {
      if (!habits.length) {
        habitListEl.innerHTML = '<p class="empty">No habits yet. Add your first one above.</p>';
        return;
      }
      habitListEl.innerHTML = habits.map(habitCard).join('');
    };

    const refresh = async () => {
      const data = await request('/api/habits');
      renderOverview(data.fourteen_day_overview);
      renderHabits(data.habits);
    };

    const outcomeMessage = (habit, outcome) => {
      switch (outcome) {
        case 'marked':
          return habit.title + ' marked as complete for today!';
        case 'already_marked':
          return habit.title + ' is already completed for today.';
        case 'unmarked':
          return habit.title + ' marked as incomplete for today.';
        default:
          return habit.title + ' was not completed today.';
      }
    };

    newHabitForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        title: newTitleEl.value,
        description: newDescriptionEl.value.trim() ? newDescriptionEl.value : null
      };
      request('/api/habits', jsonOptions('POST', payload))
        .then(() => {
          newTitleEl.value = '';
          newDescriptionEl.value = '';
          flash('Habit created');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    habitListEl.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const card = button.closest('.habit-card');
      const id = Number(card.dataset.id);
      const action = button.dataset.action;

      if (action === 'edit') {
        editingId = id;
        refresh().catch((err) => setStatus(err.message, 'error'));
        return;
      }
      if (action === 'cancel') {
        editingId = null;
        refresh().catch((err) => setStatus(err.message, 'error'));
        return;
      }
      if (action === 'delete') {
        if (!window.confirm('Delete this habit and its history?')) {
          return;
        }
        request('/api/habits/' + id, { method: 'DELETE' })
          .then(() => {
            flash('Habit deleted');
            return refresh();
          })
          .catch((err) => setStatus(err.message, 'error'));
        return;
      }
      if (action === 'complete' || action === 'uncomplete') {
        request('/api/habits/' + id + '/' + action, { method: 'POST' })
          .then((result) => {
            flash(outcomeMessage(result.habit, result.outcome));
            return refresh();
          })
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    habitListEl.addEventListener('submit', (event) => {
      const form = event.target.closest('form[data-action="save"]');
      if (!form) {
        return;
      }
      event.preventDefault();
      const card = form.closest('.habit-card');
      const id = Number(card.dataset.id);
      const description = form.elements.description.value;
      const payload = {
        title: form.elements.title.value,
        description: description.trim() ? description : null
      };
      request('/api/habits/' + id, jsonOptions('PUT', payload))
        .then(() => {
          editingId = null;
          flash('Habit updated');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
