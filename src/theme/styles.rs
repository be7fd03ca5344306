//! Global CSS styles for the architecture document.
//!
//! Shared by the desktop window and the static HTML export.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INDIGO (Accents, Header) */
  --indigo: #4f46e5;
  --indigo-soft: rgba(255, 255, 255, 0.9);

  /* GRAY (Page, Text) */
  --gray-50: #f9fafb;
  --gray-400: #9ca3af;
  --gray-700: #374151;
  --gray-800: #1f2937;
  --gray-900: #111827;
  --white: #ffffff;

  /* Typography */
  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Type Scale */
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.25rem;

  /* Shape */
  --radius: 0.5rem;
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
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
  font-family: var(--font-sans);
  background: var(--gray-50);
  color: var(--gray-900);
  line-height: 1.5;
}

/* === Layout === */
.page {
  min-height: 100vh;
  background: var(--gray-50);
}

.container,
.page__main {
  max-width: 72rem;
  margin: 0 auto;
  padding-left: 1rem;
  padding-right: 1rem;
}

.page__main {
  padding-top: 3rem;
  padding-bottom: 3rem;
}

.stack > * + * {
  margin-top: 1rem;
}

.stack--loose > * + * {
  margin-top: 1.5rem;
}

/* === Header & Footer === */
.site-header {
  background: var(--indigo);
  color: var(--white);
  padding: 4rem 0;
}

.site-header__title {
  font-size: var(--text-4xl);
  font-weight: 700;
  margin-bottom: 1rem;
}

.site-header__tagline {
  font-size: var(--text-xl);
  color: var(--indigo-soft);
}

.site-footer {
  background: var(--gray-800);
  color: var(--white);
  padding: 2rem 0;
}

.site-footer__notice {
  text-align: center;
  color: var(--gray-400);
}

/* === Section === */
.section {
  margin-bottom: 3rem;
}

.section__heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.section__title {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--gray-900);
}

.icon {
  width: 1.5rem;
  height: 1.5rem;
  color: var(--indigo);
  flex-shrink: 0;
}

/* === Card === */
.card {
  background: var(--white);
  border-radius: var(--radius);
  box-shadow: var(--shadow-md);
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.card__title {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--gray-800);
  margin-bottom: 0.75rem;
}

.card__text {
  color: var(--gray-700);
  margin-bottom: 0.75rem;
}

.card__figure {
  display: block;
  width: 100%;
  border-radius: var(--radius);
  margin-bottom: 1rem;
}

.card-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

.card-grid > .card {
  margin-bottom: 0;
}

@media (min-width: 768px) {
  .card-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

/* === Lists === */
.topic__title {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.bullet-list {
  list-style: disc inside;
  color: var(--gray-700);
}

.bullet-list > li + li {
  margin-top: 0.5rem;
}

.bullet-list--nested {
  list-style-type: circle;
  margin-left: 1.5rem;
  margin-top: 0.25rem;
}

.bullet-list--nested > li + li {
  margin-top: 0;
}
"#;
