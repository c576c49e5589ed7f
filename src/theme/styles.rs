//! Global CSS styles for CozyNest.
//!
//! Soft pastel aesthetic: lavender and rose gradients, rounded cards, a
//! cream diary paper, and a fixed bottom tab bar.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LAVENDER (primary accent) */
  --violet: #8b5cf6;
  --violet-soft: #ede9fe;
  --violet-deep: #6d28d9;

  /* ROSE (secondary accent) */
  --rose: #f472b6;
  --rose-soft: #fce7f3;

  /* SURFACES */
  --cloud: #faf7ff;
  --paper: #fff8dc;
  --card: #ffffff;

  /* TEXT */
  --ink: #374151;
  --ink-muted: #6b7280;
  --ink-faint: #9ca3af;

  /* SEMANTIC */
  --danger: #ef4444;

  /* Typography */
  --font-body: 'Poppins', 'Segoe UI', sans-serif;
  --font-script: 'Dancing Script', 'Segoe Script', cursive;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-breath: 1s linear;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--cloud);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Shell === */
.shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.shell-header {
  background: var(--card);
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.06);
  padding: 1rem;
  text-align: center;
}

.shell-title {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--violet);
}

.shell-main {
  flex: 1;
  width: 100%;
  max-width: 720px;
  margin: 0 auto;
  padding: 1.5rem 1rem 5.5rem;
}

.stack {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

/* === Cards === */
.card {
  background: var(--card);
  border-radius: 1rem;
  box-shadow: 0 2px 10px rgba(139, 92, 246, 0.08);
  padding: 1.5rem;
}

.card-gradient {
  background: linear-gradient(to right, var(--violet-soft), var(--rose-soft));
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--violet-deep);
  margin-bottom: 1rem;
}

.card-subtitle {
  font-size: 0.875rem;
  color: var(--ink-muted);
  margin-top: -0.75rem;
  margin-bottom: 1rem;
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--violet);
  color: #fff;
  border: none;
  border-radius: 0.75rem;
  padding: 0.6rem 1.4rem;
  font-family: inherit;
  font-size: 0.95rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary:hover { background: var(--violet-deep); }
.btn-primary:disabled { opacity: 0.6; cursor: default; }

.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--violet-soft);
  color: var(--violet-deep);
  border: none;
  border-radius: 0.75rem;
  padding: 0.6rem 1.2rem;
  font-family: inherit;
  font-size: 0.95rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-ghost:hover { background: var(--rose-soft); }
.btn-ghost:disabled { opacity: 0.5; cursor: default; }

.btn-script {
  background: none;
  border: none;
  font-family: var(--font-script);
  font-size: 1.1rem;
  color: var(--ink-muted);
  cursor: pointer;
}

.btn-script:hover { color: var(--ink); }

/* === Bottom tab bar === */
.tab-bar {
  position: fixed;
  left: 0;
  right: 0;
  bottom: 0;
  background: var(--card);
  box-shadow: 0 -2px 10px rgba(0, 0, 0, 0.05);
  display: flex;
  justify-content: space-around;
  padding: 0.4rem 0;
}

.tab-btn {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.15rem;
  background: none;
  border: none;
  color: var(--ink-faint);
  font-family: inherit;
  font-size: 0.7rem;
  padding: 0.5rem 0.9rem;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.tab-btn:hover { color: var(--ink-muted); }
.tab-btn.active { color: var(--violet); }

.tab-glyph { font-size: 1.2rem; line-height: 1; }

/* === Affirmation card === */
.affirmation-text {
  font-size: 1.15rem;
  font-style: italic;
  font-weight: 500;
  color: var(--violet-deep);
  margin-bottom: 1.25rem;
}

/* === Breathing exercise === */
.breath-stage {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  margin: 1.5rem 0;
}

.breath-circle {
  background: var(--violet-soft);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: width var(--transition-breath), height var(--transition-breath);
}

.breath-count {
  font-size: 1.3rem;
  font-weight: 600;
  color: var(--violet-deep);
}

.breath-label {
  color: var(--violet);
  font-weight: 500;
}

.breath-cycles {
  font-size: 0.85rem;
  color: var(--ink-muted);
}

.breath-controls {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

/* === Self-care === */
.tip-section-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.05rem;
  font-weight: 500;
  color: var(--rose);
  margin: 1rem 0 0.5rem;
}

.tip-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.tip-item {
  display: flex;
  gap: 0.5rem;
  align-items: baseline;
  color: var(--ink);
}

.tip-dot { color: var(--rose); }

/* === Music === */
.track-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  margin-bottom: 1rem;
}

.track-item {
  width: 100%;
  text-align: left;
  background: none;
  border: none;
  border-radius: 0.6rem;
  padding: 0.6rem 0.9rem;
  font-family: inherit;
  font-size: 0.95rem;
  color: var(--ink);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.track-item:hover { background: var(--violet-soft); }
.track-item.playing {
  background: var(--violet-soft);
  color: var(--violet-deep);
  font-weight: 600;
}

.player-audio { width: 100%; }

/* === Galleries === */
.photo-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  gap: 0.75rem;
}

.photo-cell img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 0.6rem;
}

.photo-caption {
  font-size: 0.8rem;
  color: var(--ink-muted);
  text-align: center;
  margin-top: 0.25rem;
}

.memory-wall {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
}

.memory-card {
  background: var(--card);
  padding: 0.75rem 0.75rem 0.4rem;
  margin: 0.75rem;
  border-radius: 0.3rem;
  box-shadow: 0 3px 8px rgba(0, 0, 0, 0.12);
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.memory-card:hover {
  transform: translateY(-6px) rotate(0deg) !important;
  box-shadow: 0 8px 18px rgba(0, 0, 0, 0.18);
}

.memory-card img {
  width: 11rem;
  height: 11rem;
  object-fit: cover;
}

.memory-title {
  font-family: var(--font-script);
  font-size: 1rem;
  text-align: center;
  color: var(--ink);
  padding: 0.4rem 0 0.2rem;
}

.overlay {
  position: fixed;
  inset: 0;
  z-index: 10;
  background: rgba(0, 0, 0, 0.8);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.overlay-frame {
  background: var(--card);
  border-radius: 0.75rem;
  overflow: hidden;
  max-width: 640px;
  width: 100%;
}

.overlay-frame img {
  width: 100%;
  max-height: 70vh;
  object-fit: contain;
}

.overlay-caption {
  padding: 1rem 1.25rem;
  font-family: var(--font-script);
  font-size: 1.3rem;
}

/* === Diary === */
.diary-login {
  max-width: 380px;
  margin: 2.5rem auto 0;
}

.diary-login-title {
  font-family: var(--font-script);
  font-size: 1.8rem;
  text-align: center;
  margin-bottom: 1.5rem;
}

.field-input {
  width: 100%;
  padding: 0.6rem 0.8rem;
  border: 1px solid #e5e7eb;
  border-radius: 0.5rem;
  font-family: inherit;
  font-size: 0.95rem;
  margin-bottom: 1rem;
}

.field-input:focus {
  outline: 2px solid var(--violet);
  border-color: transparent;
}

.form-error {
  color: var(--danger);
  font-size: 0.85rem;
  margin-bottom: 1rem;
}

.diary-toolbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.25rem;
}

.diary-count {
  font-family: var(--font-script);
  font-size: 1.15rem;
  color: var(--ink-muted);
}

.diary-paper {
  background: var(--paper);
  border-radius: 0.75rem;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
  padding: 1.5rem;
  margin-bottom: 1.5rem;
  position: relative;
}

.diary-date {
  font-family: var(--font-script);
  font-size: 1.3rem;
  margin-bottom: 0.75rem;
}

.diary-text {
  width: 100%;
  min-height: 11rem;
  background: transparent;
  border: none;
  resize: vertical;
  font-family: var(--font-script);
  font-size: 1.15rem;
  line-height: 1.8;
}

.diary-text:focus { outline: none; }

.diary-body {
  font-family: var(--font-script);
  font-size: 1.15rem;
  line-height: 1.8;
  white-space: pre-wrap;
}

.diary-delete {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
  background: none;
  border: none;
  font-size: 1.1rem;
  color: var(--ink-faint);
  cursor: pointer;
}

.diary-delete:hover { color: var(--ink-muted); }

.pager {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 1rem;
}

.pager-pos {
  font-size: 0.85rem;
  color: var(--ink-muted);
}

/* === Misc === */
.empty-hint {
  text-align: center;
  color: var(--ink-faint);
  padding: 2.5rem 1rem;
}

.loading-veil {
  text-align: center;
  padding: 3rem 1rem;
  font-family: var(--font-script);
  font-size: 1.3rem;
  color: var(--violet);
}
"#;
