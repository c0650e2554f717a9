//! Syntax validator for PSeInt pseudocode.
//!
//! Block constructs are tracked on a stack: every closer must match the most
//! recently opened construct, and anything still open at the end of the file
//! is reported. Keywords are case-insensitive, as in PSeInt itself.

use crate::traits::validator::SyntaxValidator;
use crate::types::SyntaxError;
use crate::validators::strip_line_comment;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use util::languages::Language;

lazy_static! {
    pub(crate) static ref DEFINIR_HEAD: Regex = Regex::new(r"(?i)^definir\b").unwrap();
    /// `Definir a, b Como Entero`
    pub(crate) static ref DEFINIR: Regex = Regex::new(
        r"(?i)^definir\s+([a-z_]\w*(?:\s*,\s*[a-z_]\w*)*)\s+como\s+(entero|real|numero|numerico|caracter|texto|cadena|logico)\s*;?$"
    ).unwrap();
    /// `x <- expr`
    pub(crate) static ref ASSIGNMENT: Regex =
        Regex::new(r"(?i)^([a-z_]\w*)\s*<-\s*(.+?)\s*;?$").unwrap();
    /// `Si cond Entonces`; the capture is everything after `Si`.
    pub(crate) static ref SI: Regex = Regex::new(r"(?i)^si\b(.*)$").unwrap();
    static ref ENTONCES_SUFFIX: Regex = Regex::new(r"(?i)\s*\bentonces\s*$").unwrap();
    pub(crate) static ref PARA_HEAD: Regex = Regex::new(r"(?i)^para\b").unwrap();
    /// `Para i <- 1 Hasta 10 [Con Paso 2] [Hacer]`
    pub(crate) static ref PARA: Regex = Regex::new(
        r"(?i)^para\s+([a-z_]\w*)\s*<-\s*(.+?)\s+hasta\s+(.+?)(?:\s+con\s+paso\s+(.+?))?(?:\s+hacer)?\s*$"
    ).unwrap();
    pub(crate) static ref MIENTRAS: Regex = Regex::new(r"(?i)^mientras\b").unwrap();
    pub(crate) static ref REPETIR: Regex = Regex::new(r"(?i)^repetir\b").unwrap();
    pub(crate) static ref SEGUN: Regex = Regex::new(r"(?i)^segun\b").unwrap();
    pub(crate) static ref PROCESO: Regex = Regex::new(r"(?i)^(proceso|algoritmo)\b").unwrap();
    pub(crate) static ref CLOSER: Regex = Regex::new(
        r"(?i)^(finsi|finpara|finmientras|finsegun|finproceso|finalgoritmo)\b"
    ).unwrap();
    pub(crate) static ref HASTA_QUE: Regex = Regex::new(r"(?i)^hasta\s+que\b").unwrap();
    pub(crate) static ref SINO: Regex = Regex::new(r"(?i)^(sino|de\s*otro\s*modo)\b").unwrap();
}

/// Block constructs that must be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Si,
    Para,
    Mientras,
    Repetir,
    Segun,
    Proceso,
    Algoritmo,
}

impl Construct {
    pub fn name(self) -> &'static str {
        match self {
            Construct::Si => "Si",
            Construct::Para => "Para",
            Construct::Mientras => "Mientras",
            Construct::Repetir => "Repetir",
            Construct::Segun => "Segun",
            Construct::Proceso => "Proceso",
            Construct::Algoritmo => "Algoritmo",
        }
    }

    /// The token that closes this construct.
    pub fn closer(self) -> &'static str {
        match self {
            Construct::Si => "FinSi",
            Construct::Para => "FinPara",
            Construct::Mientras => "FinMientras",
            Construct::Repetir => "Hasta Que",
            Construct::Segun => "FinSegun",
            Construct::Proceso => "FinProceso",
            Construct::Algoritmo => "FinAlgoritmo",
        }
    }

    fn from_closer(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "finsi" => Some(Construct::Si),
            "finpara" => Some(Construct::Para),
            "finmientras" => Some(Construct::Mientras),
            "finsegun" => Some(Construct::Segun),
            "finproceso" => Some(Construct::Proceso),
            "finalgoritmo" => Some(Construct::Algoritmo),
            _ => None,
        }
    }
}

pub struct PseIntValidator;

#[derive(Default)]
struct ScanState {
    defined: HashSet<String>,
    open: Vec<(Construct, usize)>,
    errors: Vec<SyntaxError>,
}

impl ScanState {
    fn close(&mut self, closing: Construct, line_no: usize) {
        let token = closing.closer();
        match self.open.last() {
            None => self.errors.push(SyntaxError::sintaxis(
                line_no,
                format!("'{token}' inesperado: no hay ninguna estructura abierta"),
            )),
            Some(&(top, opened_at)) if top != closing => self.errors.push(SyntaxError::sintaxis(
                line_no,
                format!(
                    "'{token}' inesperado: se esperaba '{}' para cerrar '{}' (línea {opened_at})",
                    top.closer(),
                    top.name()
                ),
            )),
            Some(_) => {
                self.open.pop();
            }
        }
    }

    fn define(&mut self, line: &str, line_no: usize) {
        match DEFINIR.captures(line) {
            Some(caps) => {
                for name in caps[1].split(',') {
                    self.defined.insert(name.trim().to_lowercase());
                }
            }
            None => self.errors.push(SyntaxError::sintaxis(
                line_no,
                "Declaración mal formada: se esperaba 'Definir <variable> Como <Tipo>'",
            )),
        }
    }

    /// Handles block headers. Returns false when `line` is not one.
    fn open_block(&mut self, line: &str, line_no: usize) -> bool {
        if let Some(caps) = SI.captures(line) {
            let condition = ENTONCES_SUFFIX.replace(caps[1].trim(), "");
            if condition.trim().is_empty() {
                self.errors.push(SyntaxError::sintaxis(
                    line_no,
                    "La estructura 'Si' necesita una condición",
                ));
            }
            self.open.push((Construct::Si, line_no));
        } else if PARA_HEAD.is_match(line) {
            if !PARA.is_match(line) {
                self.errors.push(SyntaxError::sintaxis(
                    line_no,
                    "Estructura 'Para' mal formada: se esperaba 'Para <variable> <- <inicio> Hasta <fin>'",
                ));
            }
            self.open.push((Construct::Para, line_no));
        } else if MIENTRAS.is_match(line) {
            self.open.push((Construct::Mientras, line_no));
        } else if REPETIR.is_match(line) {
            self.open.push((Construct::Repetir, line_no));
        } else if SEGUN.is_match(line) {
            self.open.push((Construct::Segun, line_no));
        } else if let Some(caps) = PROCESO.captures(line) {
            let construct = if caps[1].eq_ignore_ascii_case("algoritmo") {
                Construct::Algoritmo
            } else {
                Construct::Proceso
            };
            self.open.push((construct, line_no));
        } else {
            return false;
        }
        true
    }

    fn assign(&mut self, target: &str, line_no: usize) {
        if !self.defined.contains(&target.to_lowercase()) {
            self.errors.push(SyntaxError::variable(
                line_no,
                format!("La variable '{target}' no fue definida"),
            ));
        }
    }

    fn scan_line(&mut self, line: &str, line_no: usize) {
        if let Some(caps) = CLOSER.captures(line) {
            if let Some(closing) = Construct::from_closer(&caps[1]) {
                self.close(closing, line_no);
            }
        } else if HASTA_QUE.is_match(line) {
            self.close(Construct::Repetir, line_no);
        } else if SINO.is_match(line) {
            // branch separator inside Si / Segun
        } else if DEFINIR_HEAD.is_match(line) {
            self.define(line, line_no);
        } else if self.open_block(line, line_no) {
            // header handled
        } else if let Some(caps) = ASSIGNMENT.captures(line) {
            self.assign(&caps[1], line_no);
        } else if self.open.is_empty() && !line.ends_with(';') {
            self.errors.push(SyntaxError::sintaxis(
                line_no,
                format!("Falta punto y coma (;) al final de la línea {line_no}"),
            ));
        }
    }
}

impl SyntaxValidator for PseIntValidator {
    fn language(&self) -> Language {
        Language::PSeInt
    }

    fn validate(&self, code: &str) -> Vec<SyntaxError> {
        let mut state = ScanState::default();

        for (idx, raw) in code.lines().enumerate() {
            let line = strip_line_comment(raw.trim()).trim();
            if line.is_empty() {
                continue;
            }
            state.scan_line(line, idx + 1);
        }

        for (construct, opened_at) in &state.open {
            state.errors.push(SyntaxError::sintaxis(
                0,
                format!(
                    "La estructura '{}' abierta en la línea {opened_at} no fue cerrada (falta '{}')",
                    construct.name(),
                    construct.closer()
                ),
            ));
        }

        tracing::debug!(errors = state.errors.len(), "validated PSeInt submission");
        state.errors
    }
}
