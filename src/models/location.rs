//! Shelf locations offered by the location picker.
//!
//! Stored locations are free text: the picker only suggests these values.

pub const LOCATIONS: [&str; 6] = [
    "Entrada 4to Piso",
    "Pasadizo 4to Piso",
    "Izquierda 4to Piso",
    "Medio 4to Piso",
    "Fondo 4to Piso",
    "Derecha 4to Piso",
];
