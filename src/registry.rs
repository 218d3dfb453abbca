use serde::Serialize;

pub const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

const TITLE_PREFIX: &str = "Relatório de ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportCategory {
    Students,
    Guardians,
    PastoralCare,
    AcademicPerformance,
    StudentEntries,
    PedagogicalOccurrences,
}

impl ReportCategory {
    /// Navigation order.
    pub const ALL: [ReportCategory; 6] = [
        ReportCategory::Students,
        ReportCategory::Guardians,
        ReportCategory::PastoralCare,
        ReportCategory::AcademicPerformance,
        ReportCategory::StudentEntries,
        ReportCategory::PedagogicalOccurrences,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportCategory::Students => "students",
            ReportCategory::Guardians => "guardians",
            ReportCategory::PastoralCare => "pastoralCare",
            ReportCategory::AcademicPerformance => "academicPerformance",
            ReportCategory::StudentEntries => "studentEntries",
            ReportCategory::PedagogicalOccurrences => "pedagogicalOccurrences",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw.trim())
    }

    pub fn meta(self) -> &'static ReportMeta {
        match self {
            ReportCategory::Students => &STUDENTS,
            ReportCategory::Guardians => &GUARDIANS,
            ReportCategory::PastoralCare => &PASTORAL_CARE,
            ReportCategory::AcademicPerformance => &ACADEMIC_PERFORMANCE,
            ReportCategory::StudentEntries => &STUDENT_ENTRIES,
            ReportCategory::PedagogicalOccurrences => &PEDAGOGICAL_OCCURRENCES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Select,
}

/// Fixed-option selector shown in place of a free-text filter.
#[derive(Debug)]
pub struct CustomFilter {
    pub column: &'static str,
    pub kind: FilterKind,
    pub options: &'static [&'static str],
    pub label: Option<&'static str>,
}

#[derive(Debug)]
pub struct ReportMeta {
    pub title: &'static str,
    pub file_name: &'static str,
    pub icon: &'static str,
    pub exclude_filters: &'static [&'static str],
    pub custom_filters: &'static [CustomFilter],
    pub header_note: Option<&'static str>,
}

impl ReportMeta {
    pub fn short_title(&self) -> &'static str {
        self.title.strip_prefix(TITLE_PREFIX).unwrap_or(self.title)
    }

    pub fn custom_filter(&self, column: &str) -> Option<&'static CustomFilter> {
        self.custom_filters.iter().find(|f| f.column == column)
    }

    pub fn is_filter_excluded(&self, column: &str) -> bool {
        self.exclude_filters.iter().any(|c| *c == column)
    }
}

// Month selectors cover both shapes of the monthly logs: a textual "Mês"
// column and a date-valued "Data" column. Only the one present renders.
static MONTH_FILTERS: [CustomFilter; 2] = [
    CustomFilter {
        column: "Mês",
        kind: FilterKind::Select,
        options: &MONTHS,
        label: None,
    },
    CustomFilter {
        column: "Data",
        kind: FilterKind::Select,
        options: &MONTHS,
        label: Some("Mês"),
    },
];

static STUDENTS: ReportMeta = ReportMeta {
    title: "Relatório de Alunos",
    file_name: "alunos.json",
    icon: "users",
    exclude_filters: &[],
    custom_filters: &[],
    header_note: None,
};

static GUARDIANS: ReportMeta = ReportMeta {
    title: "Relatório de Responsáveis",
    file_name: "responsaveis_alunos.json",
    icon: "users",
    exclude_filters: &[
        "E-mail do responsável",
        "Telefone",
        "Termo LGPD",
        "Responsável legal",
    ],
    custom_filters: &[],
    header_note: None,
};

static PASTORAL_CARE: ReportMeta = ReportMeta {
    title: "Relatório de Atendimentos da Pastoral",
    file_name: "atendimentos_pastoral.json",
    icon: "heart",
    exclude_filters: &["Ação", "Observação", "Participação em Atividades"],
    custom_filters: &MONTH_FILTERS,
    header_note: None,
};

static ACADEMIC_PERFORMANCE: ReportMeta = ReportMeta {
    title: "Relatório de Desempenho Acadêmico",
    file_name: "desempenho_academico.json",
    icon: "academic-cap",
    exclude_filters: &["Desempenho", "Observação", "Habilidades socioemocionais"],
    custom_filters: &MONTH_FILTERS,
    header_note: None,
};

static STUDENT_ENTRIES: ReportMeta = ReportMeta {
    title: "Relatório de Entradas e Saídas",
    file_name: "entradas_estudantes.json",
    icon: "clipboard-list",
    exclude_filters: &["Entrada", "Saída", "Data"],
    custom_filters: &[CustomFilter {
        column: "Falta/presença",
        kind: FilterKind::Select,
        options: &["presença", "falta"],
        label: None,
    }],
    header_note: Some("Horário de entrada padrão: 07:00. Horário de saída padrão: 12:00."),
};

static PEDAGOGICAL_OCCURRENCES: ReportMeta = ReportMeta {
    title: "Relatório de Ocorrências Pedagógicas",
    file_name: "ocorrencias_pedagogicas.json",
    icon: "exclamation",
    exclude_filters: &[],
    custom_filters: &[],
    header_note: None,
};

/// 1-based, zero-padded month number for a month name.
pub fn month_number(name: &str) -> Option<String> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|idx| format!("{:02}", idx + 1))
}
