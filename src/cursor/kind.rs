use std::fmt;

/// What a cursor refers to, named after libclang's `CXCursorKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    TranslationUnit,

    // Declarations
    StructDecl,
    UnionDecl,
    ClassDecl,
    EnumDecl,
    FieldDecl,
    EnumConstantDecl,
    FunctionDecl,
    VarDecl,
    ParmDecl,
    TypedefDecl,
    CXXMethod,
    Destructor,
    Namespace,
    TemplateTypeParameter,
    TypeAliasDecl,
    UsingDeclaration,
    CXXAccessSpecifier,
    ObjCInterfaceDecl,
    ObjCCategoryDecl,
    ObjCProtocolDecl,
    ObjCPropertyDecl,
    ObjCInstanceMethodDecl,
    ObjCClassMethodDecl,
    ObjCImplementationDecl,
    ObjCCategoryImplDecl,
    ObjCIvarDecl,
    ObjCSynthesizeDecl,
    ObjCDynamicDecl,

    // References
    TypeRef,
    NamespaceRef,
    MemberRefExpr,
    DeclRefExpr,
    ObjCSuperClassRef,
    ObjCClassRef,
    ObjCProtocolRef,

    // Expressions
    CallExpr,
    ObjCMessageExpr,
    ObjCSelectorExpr,
    IntegerLiteral,
    FloatingLiteral,
    StringLiteral,
    CharacterLiteral,
    ObjCStringLiteral,
    CXXBoolLiteralExpr,
    CXXNullPtrLiteralExpr,
    CXXThisExpr,
    CXXNewExpr,
    CXXDeleteExpr,
    LambdaExpr,
    ParenExpr,
    UnaryOperator,
    BinaryOperator,
    CompoundAssignOperator,
    ConditionalOperator,
    ArraySubscriptExpr,
    CStyleCastExpr,
    InitListExpr,
    UnaryExpr,

    // Statements
    CompoundStmt,
    IfStmt,
    SwitchStmt,
    CaseStmt,
    DefaultStmt,
    WhileStmt,
    DoStmt,
    ForStmt,
    GotoStmt,
    LabelStmt,
    ContinueStmt,
    BreakStmt,
    ReturnStmt,

    // Preprocessing
    MacroDefinition,
    InclusionDirective,
}

impl CursorKind {
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            Self::StructDecl
                | Self::UnionDecl
                | Self::ClassDecl
                | Self::EnumDecl
                | Self::FieldDecl
                | Self::EnumConstantDecl
                | Self::FunctionDecl
                | Self::VarDecl
                | Self::ParmDecl
                | Self::TypedefDecl
                | Self::CXXMethod
                | Self::Destructor
                | Self::Namespace
                | Self::TemplateTypeParameter
                | Self::TypeAliasDecl
                | Self::UsingDeclaration
                | Self::CXXAccessSpecifier
                | Self::ObjCInterfaceDecl
                | Self::ObjCCategoryDecl
                | Self::ObjCProtocolDecl
                | Self::ObjCPropertyDecl
                | Self::ObjCInstanceMethodDecl
                | Self::ObjCClassMethodDecl
                | Self::ObjCImplementationDecl
                | Self::ObjCCategoryImplDecl
                | Self::ObjCIvarDecl
                | Self::ObjCSynthesizeDecl
                | Self::ObjCDynamicDecl
        )
    }

    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Self::TypeRef
                | Self::NamespaceRef
                | Self::MemberRefExpr
                | Self::DeclRefExpr
                | Self::ObjCSuperClassRef
                | Self::ObjCClassRef
                | Self::ObjCProtocolRef
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntegerLiteral
                | Self::FloatingLiteral
                | Self::StringLiteral
                | Self::CharacterLiteral
                | Self::ObjCStringLiteral
                | Self::CXXBoolLiteralExpr
                | Self::CXXNullPtrLiteralExpr
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            Self::CompoundStmt
                | Self::IfStmt
                | Self::SwitchStmt
                | Self::CaseStmt
                | Self::DefaultStmt
                | Self::WhileStmt
                | Self::DoStmt
                | Self::ForStmt
                | Self::GotoStmt
                | Self::LabelStmt
                | Self::ContinueStmt
                | Self::BreakStmt
                | Self::ReturnStmt
        )
    }

    pub fn is_preprocessing(self) -> bool {
        matches!(self, Self::MacroDefinition | Self::InclusionDirective)
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
