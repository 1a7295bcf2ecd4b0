//! Canned records backing the administrative reports

/// A registered platform account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: &'static str,
    pub email: &'static str,
    pub user_type: &'static str,
    pub registered_on: &'static str,
}

/// An approved adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdoptionRecord {
    pub id: i64,
    pub pet: &'static str,
    pub ngo: &'static str,
    pub adopter: &'static str,
    pub approved_on: &'static str,
}

/// A partner institution and its numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnershipRecord {
    pub id: i64,
    pub name: &'static str,
    pub contact: &'static str,
    pub status: &'static str,
    pub pets_registered: i64,
    pub adoptions_completed: i64,
}

const fn user(
    id: i64,
    name: &'static str,
    email: &'static str,
    user_type: &'static str,
    registered_on: &'static str,
) -> UserRecord {
    UserRecord {
        id,
        name,
        email,
        user_type,
        registered_on,
    }
}

const fn adoption(
    id: i64,
    pet: &'static str,
    ngo: &'static str,
    adopter: &'static str,
    approved_on: &'static str,
) -> AdoptionRecord {
    AdoptionRecord {
        id,
        pet,
        ngo,
        adopter,
        approved_on,
    }
}

const fn partnership(
    id: i64,
    name: &'static str,
    contact: &'static str,
    status: &'static str,
    pets_registered: i64,
    adoptions_completed: i64,
) -> PartnershipRecord {
    PartnershipRecord {
        id,
        name,
        contact,
        status,
        pets_registered,
        adoptions_completed,
    }
}

pub const USERS: &[UserRecord] = &[
    user(1, "Ana Silva", "ana.silva@email.com", "adotante", "2025-08-01"),
    user(2, "Bruno Costa", "bruno.costa@email.com", "adotante", "2025-08-03"),
    user(3, "Carla Dias", "carla.dias@email.com", "adotante", "2025-08-05"),
    user(4, "ONG Patinhas Felizes", "contato@patinhas.org", "ong", "2025-08-05"),
    user(5, "Daniel Moreira", "daniel.m@email.com", "adotante", "2025-08-10"),
    user(6, "Eduarda Lima", "eduarda.l@email.com", "adotante", "2025-08-12"),
    user(7, "Fábio Mendes", "fabio.m@email.com", "adotante", "2025-08-15"),
    user(8, "Gabriela Nunes", "gabi.nunes@email.com", "adotante", "2025-08-20"),
    user(9, "ONG Salva Cão", "contato@salvacao.org", "ong", "2025-08-21"),
    user(10, "Hugo Pereira", "hugo.p@email.com", "adotante", "2025-09-02"),
    user(11, "Isabela Rocha", "isa.rocha@email.com", "adotante", "2025-09-05"),
    user(12, "João Pedro", "jp@email.com", "adotante", "2025-09-10"),
    user(13, "Karina Alves", "karina.a@email.com", "adotante", "2025-09-12"),
    user(14, "Lucas Martins", "lucas.m@email.com", "adotante", "2025-09-15"),
    user(15, "Maria Oliveira", "maria.o@email.com", "adotante", "2025-09-20"),
    user(16, "ONG Focinhos Carentes", "ajuda@focinhos.org", "ong", "2025-09-22"),
    user(17, "Natália Souza", "natalia.s@email.com", "adotante", "2025-10-01"),
    user(18, "Otávio Santos", "otavio.s@email.com", "adotante", "2025-10-03"),
    user(19, "Patrícia Ribeiro", "patricia.r@email.com", "adotante", "2025-10-05"),
    user(20, "Quintino Barros", "quintino.b@email.com", "adotante", "2025-10-07"),
];

pub const ADOPTIONS: &[AdoptionRecord] = &[
    adoption(101, "Rex", "ONG Patinhas Felizes", "Ana Silva", "2025-09-01"),
    adoption(102, "Mimi", "ONG Salva Cão", "Bruno Costa", "2025-09-03"),
    adoption(103, "Thor", "ONG Patinhas Felizes", "Carla Dias", "2025-09-05"),
    adoption(104, "Luna", "ONG Focinhos Carentes", "Daniel Moreira", "2025-09-07"),
    adoption(105, "Max", "ONG Salva Cão", "Eduarda Lima", "2025-09-10"),
    adoption(106, "Bella", "ONG Patinhas Felizes", "Fábio Mendes", "2025-09-12"),
    adoption(107, "Charlie", "ONG Focinhos Carentes", "Gabriela Nunes", "2025-09-15"),
    adoption(108, "Lucy", "ONG Salva Cão", "Hugo Pereira", "2025-09-18"),
    adoption(109, "Cooper", "ONG Patinhas Felizes", "Isabela Rocha", "2025-09-20"),
    adoption(110, "Daisy", "ONG Focinhos Carentes", "João Pedro", "2025-09-22"),
    adoption(111, "Rocky", "ONG Salva Cão", "Karina Alves", "2025-09-25"),
    adoption(112, "Sadie", "ONG Patinhas Felizes", "Lucas Martins", "2025-09-28"),
    adoption(113, "Molly", "ONG Focinhos Carentes", "Maria Oliveira", "2025-10-01"),
    adoption(114, "Buddy", "ONG Salva Cão", "Natália Souza", "2025-10-02"),
    adoption(115, "Lola", "ONG Patinhas Felizes", "Otávio Santos", "2025-10-04"),
    adoption(116, "Duke", "ONG Focinhos Carentes", "Patrícia Ribeiro", "2025-10-05"),
    adoption(117, "Zoe", "ONG Salva Cão", "Quintino Barros", "2025-10-06"),
    adoption(118, "Bailey", "ONG Patinhas Felizes", "Ana Silva", "2025-10-08"),
    adoption(119, "Maggie", "ONG Focinhos Carentes", "Bruno Costa", "2025-10-10"),
    adoption(120, "Toby", "ONG Salva Cão", "Carla Dias", "2025-10-12"),
];

pub const PARTNERSHIPS: &[PartnershipRecord] = &[
    partnership(201, "ONG Patinhas Felizes", "contato@patinhas.org", "ativa", 42, 7),
    partnership(202, "ONG Salva Cão", "contato@salvacao.org", "ativa", 35, 7),
    partnership(203, "ONG Focinhos Carentes", "ajuda@focinhos.org", "ativa", 28, 6),
    partnership(204, "Pet Shop XYZ", "parcerias@petshopxyz.com", "em análise", 5, 0),
    partnership(205, "Clínica Veterinária Bem-Estar", "contato@bemestarvet.com", "suspensa", 3, 0),
];
