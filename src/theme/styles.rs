//! Global CSS styles for the invitation.
//!
//! Phase-dependent classes (`sealed`, `flap-opening`, `revealing`, `revealed`)
//! are set on the envelope by the app; the timings below read the
//! `--flap-duration` / `--reveal-duration` variables set from the
//! choreography config so CSS and sequencer never disagree.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER */
  --cream: #FAF5F0;
  --cream-deep: #F0E6DC;
  --paper-shadow: rgba(80, 40, 50, 0.2);

  /* BURGUNDY */
  --burgundy: #5C3A42;
  --burgundy-dark: #4A2E35;

  /* GOLD */
  --gold: #B89464;
  --gold-glow: rgba(184, 148, 100, 0.3);

  /* TEXT */
  --charcoal: #3D3D3D;
  --text-muted: #6B6B6B;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, Garamond, serif;
  --font-sans: 'Poppins', 'Montserrat', -apple-system, BlinkMacSystemFont, sans-serif;

  /* Choreography (overridden inline from the sequencer config) */
  --flap-duration: 600ms;
  --reveal-duration: 600ms;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(135deg, var(--cream), #F5EDE4, var(--cream-deep));
  color: var(--charcoal);
  min-height: 100vh;
}

.invite-root {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  overflow: hidden;
  position: relative;
}

.invite-stage {
  position: relative;
  z-index: 10;
  width: 100%;
}

/* === Floral Decorations === */
.floral {
  position: fixed;
  pointer-events: none;
  z-index: 0;
  opacity: 0;
  transform: scale(0.5);
  transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}

.floral.visible {
  opacity: 0.6;
  transform: scale(1);
}

.floral.top-left { top: 0; left: 0; }
.floral.top-right { top: 0; right: 0; rotate: 90deg; }
.floral.bottom-left { bottom: 0; left: 0; rotate: -90deg; }
.floral.bottom-right { bottom: 0; right: 0; rotate: 180deg; }

/* === Envelope === */
.envelope {
  position: relative;
  width: 100%;
  max-width: 36rem;
  margin: 0 auto;
}

.envelope-body {
  position: relative;
  background: var(--cream);
  overflow: hidden;
  height: 320px;
  border-radius: 2px;
  box-shadow: 0 20px 50px -15px var(--paper-shadow);
  transition: height var(--reveal-duration) ease, border-radius var(--reveal-duration) ease;
}

.envelope.flap-opening .envelope-body,
.envelope.revealing .envelope-body,
.envelope.revealed .envelope-body {
  height: auto;
  border-radius: 0.5rem;
}

.envelope-flap {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 160px;
  z-index: 20;
  transform-origin: top;
  clip-path: polygon(0 0, 50% 100%, 100% 0);
  background: linear-gradient(180deg, hsl(40 35% 92%) 0%, hsl(40 30% 88%) 100%);
  transition: transform var(--flap-duration) ease, opacity var(--flap-duration) ease;
}

.envelope-flap.open {
  transform: rotateX(180deg) translateY(-10px);
  opacity: 0;
}

.envelope-pattern {
  position: absolute;
  inset: 0;
  pointer-events: none;
  transition: opacity 0.3s ease;
}

.envelope-pattern.hidden {
  opacity: 0;
}

.envelope-content {
  position: relative;
  z-index: 10;
  padding-top: 2rem;
  opacity: 0;
  transform: translateY(50px);
  transition: opacity var(--reveal-duration) ease, transform var(--reveal-duration) ease;
}

.envelope-content.visible {
  opacity: 1;
  transform: translateY(0);
}

.reseal-row {
  display: flex;
  justify-content: center;
  margin-top: 2rem;
  padding-bottom: 2rem;
}

.reseal-btn {
  background: none;
  border: none;
  color: var(--burgundy);
  opacity: 0.6;
  font-size: 0.875rem;
  font-weight: 300;
  letter-spacing: 0.05em;
  text-decoration: underline;
  text-underline-offset: 4px;
  cursor: pointer;
}

.reseal-btn:hover {
  opacity: 1;
}

/* === Wax Seal === */
.seal-anchor {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  z-index: 30;
}

.wax-seal {
  position: relative;
  width: 8rem;
  height: 8rem;
  border: none;
  border-radius: 50%;
  cursor: pointer;
  background: linear-gradient(145deg, hsl(345 50% 38%), hsl(345 45% 30%), hsl(345 50% 24%));
  box-shadow:
    0 8px 32px rgba(80, 40, 50, 0.4),
    inset 0 2px 8px rgba(255, 255, 255, 0.15),
    inset 0 -4px 12px rgba(40, 20, 25, 0.3);
  transition: transform 0.2s ease;
}

.wax-seal:hover { transform: scale(1.05); }
.wax-seal:active { transform: scale(0.95); }

.wax-seal-ring {
  position: absolute;
  inset: 0.5rem;
  border-radius: 50%;
  border: 2px solid rgba(255, 255, 255, 0.2);
  opacity: 0.3;
}

.wax-seal-initials {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.875rem;
  font-weight: 300;
  letter-spacing: 0.1em;
  color: rgba(255, 255, 255, 0.9);
  text-shadow: 0 2px 4px rgba(40, 20, 25, 0.4);
}

/* === Invitation Card === */
.invitation-card {
  position: relative;
  margin: 0 1rem;
  background: var(--cream);
  border-radius: 0.5rem;
  box-shadow: 0 25px 50px -12px rgba(80, 40, 50, 0.25), 0 0 0 1px rgba(184, 148, 100, 0.2);
  padding: 3rem 2rem;
  text-align: center;
  opacity: 0;
  transform: scale(0.8);
  transition: opacity 0.8s cubic-bezier(0, 0, 0.2, 1), transform 0.8s cubic-bezier(0, 0, 0.2, 1);
}

.invitation-card.visible {
  opacity: 1;
  transform: scale(1);
}

.card-eyebrow {
  font-size: 0.875rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--burgundy);
  opacity: 0.7;
  font-weight: 300;
  margin-bottom: 1rem;
}

.card-name {
  font-size: 1.875rem;
  color: var(--burgundy);
  font-weight: 200;
  letter-spacing: 0.05em;
}

.card-heart-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  margin: 1rem 0;
  color: var(--gold);
}

.card-rule {
  height: 1px;
  width: 3rem;
  background: var(--gold);
  opacity: 0.5;
}

.card-invite-text {
  font-size: 0.875rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  font-weight: 300;
  color: var(--burgundy);
  margin: 1.5rem 0 2rem;
}

.card-section {
  margin-bottom: 2.5rem;
}

.card-label {
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--burgundy);
  opacity: 0.6;
  font-weight: 300;
  margin-bottom: 1rem;
}

.card-date {
  font-size: 1.5rem;
  font-weight: 300;
}

.card-muted {
  color: var(--text-muted);
  font-weight: 300;
  font-size: 0.875rem;
}

.card-link {
  display: inline-block;
  margin-top: 0.75rem;
  color: var(--gold);
  font-size: 0.875rem;
  font-weight: 300;
  text-decoration: none;
}

.companion-link {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 2rem;
  border: 2px solid rgba(92, 58, 66, 0.4);
  border-radius: 0.5rem;
  color: var(--burgundy);
  text-decoration: none;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  font-size: 0.875rem;
  box-shadow: 0 4px 20px var(--gold-glow);
}

.parents-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  font-size: 0.875rem;
}

/* === Countdown === */
.countdown {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.countdown-unit {
  display: flex;
  flex-direction: column;
  align-items: center;
  opacity: 0;
  animation: unit-rise 0.4s ease forwards;
  animation-delay: calc(0.8s + var(--unit-index) * 0.1s);
}

.countdown-value {
  width: 3.5rem;
  height: 3.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.5rem;
  border: 1px solid rgba(184, 148, 100, 0.2);
  background: linear-gradient(135deg, rgba(92, 58, 66, 0.1), rgba(184, 148, 100, 0.1));
  font-size: 1.5rem;
  font-weight: 300;
  color: var(--burgundy);
  animation: unit-glow 2s ease-in-out infinite;
}

.countdown-label {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--burgundy);
  opacity: 0.6;
  margin-top: 0.5rem;
  font-weight: 300;
}

@keyframes unit-rise {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes unit-glow {
  0%, 100% { box-shadow: 0 0 0 0 rgba(184, 148, 100, 0); }
  50% { box-shadow: 0 0 0 8px rgba(184, 148, 100, 0.1); }
}
"#;
