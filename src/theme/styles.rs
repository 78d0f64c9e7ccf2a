//! Global CSS styles for Valentine.
//!
//! Screen fade classes (`active`, `fade-out`) and GIF classes (`hidden`,
//! `active`) are toggled by the show controller; everything else is static.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --rose: #ff4d6d;
  --rose-glow: rgba(255, 77, 109, 0.35);
  --blush: #ffccd5;
  --cream: #fff0f3;
  --wine: #590d22;
  --text-muted: rgba(89, 13, 34, 0.6);

  --font-display: 'Pacifico', 'Brush Script MT', cursive;
  --font-body: 'Quicksand', 'Segoe UI', sans-serif;

  --fade: 400ms ease;
  --gif-fade: 800ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: linear-gradient(160deg, var(--cream), var(--blush));
  color: var(--wine);
  min-height: 100vh;
  overflow: hidden;
}

/* === Screens === */
.stage {
  position: relative;
  width: 100vw;
  height: 100vh;
}

.screen {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  padding: 2rem;
  opacity: 0;
  visibility: hidden;
  transform: scale(0.98);
  transition: opacity var(--fade), transform var(--fade), visibility var(--fade);
}

.screen.active {
  opacity: 1;
  visibility: visible;
  transform: scale(1);
}

.screen.fade-out {
  opacity: 0;
  transform: scale(1.02);
}

.title {
  font-family: var(--font-display);
  font-size: 2.2rem;
  color: var(--rose);
  text-align: center;
  text-shadow: 0 0 24px var(--rose-glow);
}

.subtitle {
  font-size: 1.1rem;
  color: var(--text-muted);
  text-align: center;
}

.card {
  background: rgba(255, 255, 255, 0.7);
  border-radius: 24px;
  padding: 2rem 1.5rem;
  box-shadow: 0 12px 40px var(--rose-glow);
  max-width: 26rem;
  width: 100%;
  text-align: center;
}

/* === Unlock === */
.question {
  margin: 1rem 0;
  font-size: 1.15rem;
}

.answer-row {
  display: flex;
  gap: 0.5rem;
}

.answer-row input {
  flex: 1;
  padding: 0.7rem 1rem;
  border: 2px solid var(--blush);
  border-radius: 999px;
  font: inherit;
  color: var(--wine);
  outline: none;
}

.answer-row input:focus {
  border-color: var(--rose);
}

.hint {
  min-height: 1.5rem;
  margin-top: 0.75rem;
  font-size: 0.95rem;
  transition: opacity var(--fade);
}

.hint.hidden { opacity: 0; }
.hint.error { color: #c9184a; }
.hint.success { color: #2d6a4f; }

/* === Buttons === */
.btn-unlock,
.btn-continue,
.btn-round {
  font: inherit;
  cursor: pointer;
  border: none;
  transition: transform 150ms ease, box-shadow 150ms ease;
}

.btn-unlock {
  padding: 0.7rem 1.4rem;
  border-radius: 999px;
  background: var(--rose);
  color: white;
}

.btn-continue {
  padding: 0.6rem 1.6rem;
  border-radius: 999px;
  background: transparent;
  border: 2px solid var(--rose);
  color: var(--rose);
}

.btn-round {
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 50%;
  background: var(--rose);
  color: white;
  font-size: 1.3rem;
}

.btn-unlock:hover:not(:disabled),
.btn-continue:hover,
.btn-round:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 18px var(--rose-glow);
}

button:disabled {
  opacity: 0.6;
  cursor: default;
}

/* === GIF Strip === */
.gif-container {
  position: relative;
  width: 9rem;
  height: 9rem;
}

.gif-item {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: contain;
  opacity: 0;
  transition: opacity var(--gif-fade);
}

.gif-item.active { opacity: 1; }
.gif-item.hidden { opacity: 0; }

/* === Memories Heart === */
.heart {
  display: grid;
  grid-template-columns: repeat(4, 4.5rem);
  grid-template-areas:
    "a b c d"
    "e f g h";
  gap: 0.6rem;
}

.memory-item {
  width: 4.5rem;
  height: 4.5rem;
  border-radius: 16px;
  overflow: hidden;
  background: var(--blush);
  display: flex;
  align-items: center;
  justify-content: center;
  animation: pop-in 600ms ease both;
}

.memory-item:nth-child(1), .memory-item:nth-child(4) { transform: translateY(1.2rem); }
.memory-item:nth-child(6), .memory-item:nth-child(7) { transform: translateY(1.6rem); }

.memory-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.memory-placeholder {
  font-size: 1.6rem;
  display: flex;
}

@keyframes pop-in {
  from { opacity: 0; scale: 0.6; }
  to { opacity: 1; scale: 1; }
}

/* === Song === */
.audio-player {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.audio-title {
  font-weight: 600;
  font-size: 1.2rem;
}

.audio-notice {
  font-size: 12px;
  color: var(--text-muted);
  margin-top: 8px;
}

.play-icon.hidden,
.pause-icon.hidden {
  display: none;
}

.progress-track {
  width: 16rem;
  height: 6px;
  border-radius: 3px;
  background: var(--blush);
  overflow: hidden;
}

.progress-bar {
  height: 100%;
  background: var(--rose);
  transition: width 250ms linear;
}

/* === Finale Collage === */
.finale-message {
  position: relative;
  z-index: 1;
}

.scattered-photos {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.scattered-photo {
  position: absolute;
  width: 6.5rem;
  padding: 0.35rem 0.35rem 1.2rem;
  background: white;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
  animation: drop-in 700ms ease both;
}

.scattered-photo img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
}

@keyframes drop-in {
  from { opacity: 0; transform: translateY(-2rem) rotate(var(--photo-rotation)); }
  to { opacity: 1; transform: rotate(var(--photo-rotation)); }
}
"#;
