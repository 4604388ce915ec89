//! Pumpkin Hill reference lists (shared by Pumpkin Hill NG)

use super::{P1Entry, P2Entry, P3Entry};

pub(super) const P1_LIST: &[P1Entry] = &[
    P1Entry { p1: "Bajo la chimenea. (Lower)", color: "#b6d7a8" },
    P1Entry { p1: "Bajo la chimenea. (Upper)", color: "#93c47d" },
    P1Entry { p1: "Calaveras a la derecha y a la izquierda.", color: "#93c47d" },
    P1Entry { p1: "Camino del tren fantasma.", color: "#6d9eeb" },
    P1Entry { p1: "Cerca de las vías ovaladas.", color: "#93c47d" },
    P1Entry { p1: "El acantilado cerca de la falda de la montaña.", color: "#e06666" },
    P1Entry { p1: "El acantilado en la montaña que tiene vías en círculo.", color: "#3c78d8" },
    P1Entry { p1: "El tiempo lo dirá...", color: "#b6d7a8" },
    P1Entry { p1: "En el barril de metal sobre el acantilado.", color: "#3c78d8" },
    P1Entry { p1: "En la cabaña sobre el acantilado.", color: "#93c47d" },
    P1Entry { p1: "En un coche que enciende un cañón.", color: "#6d9eeb" },
    P1Entry { p1: "En una cabaña sobre la ladera de la montaña.", color: "#6d9eeb" },
    P1Entry { p1: "Es suelo y también techo.", color: "#a4c2f4" },
    P1Entry { p1: "Está a punto de caerse.", color: "#a4c2f4" },
    P1Entry { p1: "Familia de calabazas.", color: "#e06666" },
    P1Entry { p1: "Fantasma con tres caras.", color: "#93c47d" },
    P1Entry { p1: "Gira pero no gira.", color: "#b6d7a8" },
    P1Entry { p1: "La calavera indica el lugar.", color: "#6d9eeb" },
    P1Entry { p1: "La lápida que velan cuatro calaveras.", color: "#a4c2ec" },
    P1Entry { p1: "La segunda calavera (Left)", color: "#93c47d" },
    P1Entry { p1: "La segunda calavera (Right)", color: "#93c47d" },
    P1Entry { p1: "Llorando de risa.", color: "#e06666" },
    P1Entry { p1: "Lugar tenebroso.", color: "#3c78d8" },
    P1Entry { p1: "Muy en lo alto.", color: "#a4c2f4" },
    P1Entry { p1: "Ponte las gafas de sol", color: "#b6d7a8" },
    P1Entry { p1: "tren fantasma y la montaña Pumpkin.", color: "#93c47d" },
    P1Entry { p1: "Tres calaveras hermanas.", color: "#ea9999" },
    P1Entry { p1: "Un camino alineado con Rings.", color: "#93c47d" },
    P1Entry { p1: "Un contenedor en lo alto de la montaña.", color: "#e06666" },
    P1Entry { p1: "Un hueco de tres pies.", color: "#e06666" },
    P1Entry { p1: "Una lápida en el césped.", color: "#a4c2f4" },
    P1Entry { p1: "¡Lucha por las Emeralds!", color: "#93c47d" },
    P1Entry { p1: "¿Es suelo, pero también es techo?", color: "#93c47d" },
    P1Entry { p1: "¿Un fantasma con tres cabezas?", color: "#6d9eeb" },
];

pub(super) const P2_LIST: &[P2Entry] = &[
    P2Entry { p2: "Acantilado rocoso", color: "#b6d7a8" },
    P2Entry { p2: "Bajo la lápida detrás de un túnel.", color: "#93c47d" },
    P2Entry { p2: "Barras de hierro frías...", color: "#cccccc" },
    P2Entry { p2: "Calaveras gemelas.", color: "#6aa84f" },
    P2Entry { p2: "Casa del espantapájaros.", color: "#ea9999" },
    P2Entry { p2: "Casa insomne.", color: "#b6d7a8" },
    P2Entry { p2: "Cementerio de la iglesia. (Isla)", color: "#a4c2f4" },
    P2Entry { p2: "Cementerio de la iglesia. (Rings)", color: "#a4c2f4" },
    P2Entry { p2: "Cerca de un espantapájaros 🎃💤", color: "#ea9999" },
    P2Entry { p2: "Debajo de las vías.", color: "#b6d7a8" },
    P2Entry { p2: "Debajo del césped detrás de un túnel.", color: "#b6d7a8" },
    P2Entry { p2: "Detrás de una calabaza grande", color: "#ea9999" },
    P2Entry { p2: "Detrás de una lápida sobre un pasadizo", color: "#6d9eeb" },
    P2Entry { p2: "En un coche que enciende un cañón. 💻💎", color: "#6d9eeb" },
    P2Entry { p2: "En una lápida en la ladera", color: "#e06666" },
    P2Entry { p2: "Entre calabazas que dan la espalda.", color: "#e06666" },
    P2Entry { p2: "entre tres calabazas 🔥🧱♨️🎃", color: "#e06666" },
    P2Entry { p2: "Estación del tren fantasma.", color: "#ea9999" },
    P2Entry { p2: "Está a punto de caerse.", color: "#f4cccc" },
    P2Entry { p2: "Intenta escalar una montaña", color: "#b6d7a8" },
    P2Entry { p2: "La calabaza que ríe.", color: "#e06666" },
    P2Entry { p2: "La persona que estabas esperando", color: "#ea9999" },
    P2Entry { p2: "La trayectoria del cohete.", color: "#ea9999" },
    P2Entry { p2: "Lo puedes ver, pero no te lo puedes llevar...", color: "#a4c2f4" },
    P2Entry { p2: "Muro de roca", color: "#cccccc" },
    P2Entry { p2: "Ponte las gafas de sol", color: "#b6d7a8" },
    P2Entry { p2: "Por la raíz del césped", color: "#a4c2f4" },
    P2Entry { p2: "Por los pies de la única chimenea", color: "#ea9999" },
    P2Entry { p2: "Sad-eyed pumpkin. (GT)", color: "#f4cccc" },
    P2Entry { p2: "Sad-eyed pumpkin. (P)", color: "#f4cccc" },
    P2Entry { p2: "Solo hay uno sobre el acantilado.", color: "#a4c2f4" },
    P2Entry { p2: "Tres barriles de metal.", color: "#93c47d" },
    P2Entry { p2: "Y: ventana de acción. 🎃⛄", color: "#ea9999" },
    P2Entry { p2: "¡Lucha por las Emeralds!", color: "#ea9999" },
];

pub(super) const P3_LIST: &[P3Entry] = &[
    P3Entry { p3: "Bad Wander", color: "#b6d7a8", is_emoji: false },
    P3Entry { p3: "Bajo las vías (P)", color: "#ea9999", is_emoji: false },
    P3Entry { p3: "Bajo una lápida muy lejana.", color: "#b6d7a8", is_emoji: false },
    P3Entry { p3: "Cara triste", color: "#a4c2f4", is_emoji: false },
    P3Entry { p3: "Cementerio en la falda", color: "#a4c2f4", is_emoji: false },
    P3Entry { p3: "Creepy Smile", color: "#e6b8af", is_emoji: false },
    P3Entry { p3: "En el camino que lleva", color: "#a4c2f4", is_emoji: false },
    P3Entry { p3: "En una jaula 🛑🚂", color: "#6d9eeb", is_emoji: false },
    P3Entry { p3: "Entre los árboles fantasmas", color: "#93c47d", is_emoji: false },
    P3Entry { p3: "Entre tres árboles", color: "#a4c2f4", is_emoji: false },
    P3Entry { p3: "Flames cross", color: "#ea9999", is_emoji: false },
    P3Entry { p3: "Flaming", color: "#e6b8af", is_emoji: false },
    P3Entry { p3: "Good Wander", color: "#b6d7a8", is_emoji: false },
    P3Entry { p3: "Intenta poner el tren fantasma", color: "#a4c2f4", is_emoji: false },
    P3Entry { p3: "KOTH", color: "#6aa84f", is_emoji: false },
    P3Entry { p3: "Ladera Church", color: "#6d9eeb", is_emoji: false },
    P3Entry { p3: "Noise", color: "#b6d7a8", is_emoji: false },
    P3Entry { p3: "Ojo derecho", color: "#b6d7a8", is_emoji: false },
    P3Entry { p3: "Plataforma rotatoria", color: "#93c47d", is_emoji: false },
    P3Entry { p3: "Skull buried 💃💀", color: "#ea9999", is_emoji: false },
    P3Entry { p3: "Tres espantapájaros", color: "#f4cccc", is_emoji: false },
    P3Entry { p3: "Tres estatuas calavera", color: "#ea9999", is_emoji: false },
    P3Entry { p3: "Una lápida solitaria en la falda", color: "#a4c2f4", is_emoji: false },
    P3Entry { p3: "¡Deslízate!", color: "#b6d7a8", is_emoji: false },
    P3Entry { p3: "⛪🙏", color: "#c9daf8", is_emoji: true },
    P3Entry { p3: "🎃🔿", color: "#f4cccc", is_emoji: true },
    P3Entry { p3: "😇👍", color: "#c9daf8", is_emoji: true },
    P3Entry { p3: "🚂💎⛪", color: "#a4c2f4", is_emoji: true },
    P3Entry { p3: "🚉⳩🎃", color: "#ea9999", is_emoji: false },
    P3Entry { p3: "🚔🚨", color: "#ea9999", is_emoji: true },
    P3Entry { p3: "🧔⛰️", color: "#a4c2f4", is_emoji: true },
];
