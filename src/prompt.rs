/// Prompt for the Focus Timer icon: a chibi clock mascot on a purple gradient.
pub const ICON_PROMPT: &str = "Create a cute anime/kawaii style icon for a Focus Timer Chrome extension.

Design specifications:
- A chibi-style anime clock character with large expressive eyes (kawaii style)
- The character should have a round clock face as its body
- Clock hands showing a focused time (like 25 minutes for Pomodoro)
- Soft gradient background from purple (#8b5cf6) to violet (#a78bfa)
- The character should have a determined/focused expression
- Small anime-style blush marks on cheeks
- Simple, clean lines that work at small sizes
- NO text or numbers on the clock face to keep it simple
- Gentle glow effect around the character
- Style: Japanese kawaii, chibi proportions, simple and iconic
- The design should be recognizable as both a timer and a cute mascot
- Colors: Primary purple (#8b5cf6), accent violet (#a78bfa), white highlights
- Clean white or light purple outline for visibility on dark backgrounds

IMPORTANT:
- Keep the design SIMPLE and CLEAN for icon use (16px-128px)
- NO complex details that would be lost at small sizes
- DO NOT include any text or watermarks
- Center the character in a square composition
- Use flat colors with minimal gradients for better scaling
";
