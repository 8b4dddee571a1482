//! Professional-care knowledge base.
//!
//! A closed catalog: every [`ProfessionalType`] resolves to exactly one
//! [`HealthProfessional`] through an exhaustive `match`, so there is no
//! lookup that can miss.

use serde::{Deserialize, Serialize};

/// How strongly a professional is indicated when recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalType {
    Psychiatrist,
    ClinicalPsychologist,
    CounselingPsychologist,
    LicensedTherapist,
    MentalHealthCounselor,
    Neurologist,
    SleepSpecialist,
    BehavioralHealthCoach,
    StressManagementSpecialist,
    CognitiveBehavioralSpecialist,
    MindfulnessInstructor,
    GroupTherapyFacilitator,
    OccupationalTherapist,
    ArtTherapist,
    CareerCounselor,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProfessional {
    #[serde(rename = "type")]
    pub kind: ProfessionalType,
    pub title: String,
    pub description: String,
    pub when_to_visit: String,
    pub priority: Priority,
}

impl ProfessionalType {
    pub const ALL: [ProfessionalType; 15] = [
        ProfessionalType::Psychiatrist,
        ProfessionalType::ClinicalPsychologist,
        ProfessionalType::CounselingPsychologist,
        ProfessionalType::LicensedTherapist,
        ProfessionalType::MentalHealthCounselor,
        ProfessionalType::Neurologist,
        ProfessionalType::SleepSpecialist,
        ProfessionalType::BehavioralHealthCoach,
        ProfessionalType::StressManagementSpecialist,
        ProfessionalType::CognitiveBehavioralSpecialist,
        ProfessionalType::MindfulnessInstructor,
        ProfessionalType::GroupTherapyFacilitator,
        ProfessionalType::OccupationalTherapist,
        ProfessionalType::ArtTherapist,
        ProfessionalType::CareerCounselor,
    ];

    /// The catalog entry for this type.
    pub fn profile(self) -> HealthProfessional {
        let (title, description, when_to_visit, priority) = match self {
            ProfessionalType::Psychiatrist => (
                "Psychiatrist",
                "A medical doctor specializing in mental health who can diagnose mental disorders, prescribe medications, and provide comprehensive psychiatric treatment. They are trained to understand the complex relationship between emotional and physical health, and can offer both medication management and psychotherapy when needed.",
                "Consider visiting a psychiatrist if you experience severe mood swings, persistent anxiety or depression that significantly impacts daily functioning, thoughts of self-harm, or if you suspect you may benefit from medication to manage mental health symptoms.",
                Priority::High,
            ),
            ProfessionalType::ClinicalPsychologist => (
                "Clinical Psychologist",
                "A doctoral-level mental health professional who specializes in assessing, diagnosing, and treating psychological disorders through evidence-based therapeutic approaches. They conduct psychological testing, provide psychotherapy including cognitive-behavioral therapy (CBT), and help develop coping strategies for various mental health conditions.",
                "Seek a clinical psychologist when you need comprehensive psychological assessment, therapy for complex mental health issues like trauma, personality concerns, or when you want to understand your psychological patterns through formal testing and structured therapeutic intervention.",
                Priority::High,
            ),
            ProfessionalType::CounselingPsychologist => (
                "Counseling Psychologist",
                "A mental health professional focused on helping individuals navigate life transitions, relationship issues, stress management, and emotional difficulties. They emphasize personal strengths and healthy functioning rather than pathology, making them ideal for those seeking personal growth and improved well-being.",
                "Visit a counseling psychologist when facing life transitions such as career changes, relationship difficulties, grief, or when you want to enhance your personal development, improve communication skills, or build better coping mechanisms for everyday stress.",
                Priority::Medium,
            ),
            ProfessionalType::LicensedTherapist => (
                "Licensed Therapist (LMFT/LCSW)",
                "Licensed mental health professionals including Marriage and Family Therapists (LMFT) and Licensed Clinical Social Workers (LCSW) who provide therapy for individuals, couples, and families. They are trained in various therapeutic modalities and can address relationship dynamics, family systems, and individual mental health concerns.",
                "Consider a licensed therapist when experiencing relationship conflicts, family communication issues, couples therapy needs, or when seeking individual therapy with a professional who understands social and relational contexts of mental health.",
                Priority::Medium,
            ),
            ProfessionalType::MentalHealthCounselor => (
                "Licensed Mental Health Counselor",
                "A trained professional who provides counseling services for a wide range of mental health concerns including anxiety, depression, stress, and life challenges. They offer supportive therapy, help develop coping skills, and guide clients toward healthier emotional patterns and improved quality of life.",
                "Seek a mental health counselor for general emotional support, mild to moderate anxiety or depression, stress management, adjustment issues, or when you need someone to talk to about life challenges in a structured therapeutic environment.",
                Priority::Low,
            ),
            ProfessionalType::Neurologist => (
                "Neurologist",
                "A medical specialist who diagnoses and treats disorders of the nervous system including the brain, spinal cord, and nerves. They can identify neurological causes of cognitive, emotional, or behavioral symptoms and work collaboratively with mental health professionals when both neurological and psychological factors are involved.",
                "Consult a neurologist if you experience cognitive difficulties like memory problems, concentration issues, sleep disorders with potential neurological causes, headaches affecting mental clarity, or when there may be a physical brain-based component to your symptoms.",
                Priority::Medium,
            ),
            ProfessionalType::SleepSpecialist => (
                "Sleep Medicine Specialist",
                "A physician specializing in diagnosing and treating sleep disorders that significantly impact mental health and daily functioning. They understand the bidirectional relationship between sleep and mental health, conducting sleep studies and providing treatments for insomnia, sleep apnea, and circadian rhythm disorders.",
                "Visit a sleep specialist if you experience chronic insomnia, excessive daytime sleepiness, irregular sleep patterns affecting mood and cognition, suspected sleep apnea, or when poor sleep quality is contributing to anxiety, depression, or cognitive difficulties.",
                Priority::Medium,
            ),
            ProfessionalType::BehavioralHealthCoach => (
                "Behavioral Health Coach",
                "A trained professional who helps individuals set and achieve health-related goals, build sustainable habits, and make lifestyle changes that support mental and physical well-being. They focus on motivation, accountability, and practical strategies for behavior change rather than treating clinical disorders.",
                "Consider a behavioral health coach when you want to develop healthier habits, improve work-life balance, increase motivation, build resilience, or need accountability and guidance in making positive lifestyle changes that support your mental health.",
                Priority::Low,
            ),
            ProfessionalType::StressManagementSpecialist => (
                "Stress Management Specialist",
                "A professional trained in techniques and interventions specifically designed to reduce stress and its negative effects on mental and physical health. They teach relaxation techniques, mindfulness practices, time management skills, and help identify and modify stress-triggering patterns.",
                "Seek a stress management specialist if you experience chronic stress affecting your health, difficulty relaxing, burnout symptoms, physical manifestations of stress like tension or fatigue, or want to learn evidence-based techniques for managing daily stressors.",
                Priority::Low,
            ),
            ProfessionalType::CognitiveBehavioralSpecialist => (
                "CBT Specialist",
                "A mental health professional specially trained in Cognitive Behavioral Therapy, an evidence-based approach that helps identify and change negative thought patterns and behaviors. They work collaboratively with clients to develop practical strategies for managing anxiety, depression, and other conditions.",
                "Visit a CBT specialist when you notice recurring negative thought patterns, anxiety that disrupts daily life, depressive thinking, phobias, or when you want a structured, goal-oriented approach to therapy with proven techniques for changing unhelpful thoughts and behaviors.",
                Priority::Medium,
            ),
            ProfessionalType::MindfulnessInstructor => (
                "Mindfulness-Based Therapist",
                "A therapist who integrates mindfulness practices into treatment, helping clients develop present-moment awareness, emotional regulation skills, and stress reduction techniques. They may use approaches like Mindfulness-Based Stress Reduction (MBSR) or Mindfulness-Based Cognitive Therapy (MBCT).",
                "Consider mindfulness-based therapy if you want to develop greater self-awareness, reduce rumination and worry, manage chronic stress or pain, prevent depression relapse, or learn to respond to difficult emotions with greater equanimity and acceptance.",
                Priority::Low,
            ),
            ProfessionalType::GroupTherapyFacilitator => (
                "Group Therapy Facilitator",
                "A licensed mental health professional who leads therapeutic groups, creating a supportive environment where individuals with similar concerns can share experiences, learn from each other, and develop interpersonal skills. Group therapy offers unique benefits like social support and perspective-taking.",
                "Explore group therapy when you would benefit from peer support, want to improve social skills, feel isolated and seek connection with others facing similar challenges, or when hearing others' perspectives might help normalize your experiences and provide new insights.",
                Priority::Low,
            ),
            ProfessionalType::OccupationalTherapist => (
                "Occupational Therapist",
                "A healthcare professional who helps individuals develop, recover, or maintain daily living and work skills. For mental health, they focus on how psychological conditions affect daily functioning and help create structured routines, coping strategies, and environmental modifications to support well-being.",
                "Consult an occupational therapist if mental health issues are affecting your ability to perform daily activities, maintain employment, manage time effectively, or when you need practical support in structuring your day and environment to support psychological recovery.",
                Priority::Medium,
            ),
            ProfessionalType::ArtTherapist => (
                "Art Therapist",
                "A licensed therapist who uses creative processes and artistic expression as therapeutic tools for emotional healing and personal growth. Art therapy can be particularly helpful for processing emotions that are difficult to verbalize, trauma recovery, and exploring the unconscious mind.",
                "Consider art therapy if you find verbal expression challenging, want to explore emotions through creative outlets, are processing trauma, or if traditional talk therapy hasn't fully addressed your needs. It is suitable for all ages and requires no artistic skill.",
                Priority::Low,
            ),
            ProfessionalType::CareerCounselor => (
                "Career Counselor",
                "A professional who helps individuals explore career options, navigate job transitions, and find work that aligns with their values, strengths, and interests. They understand how work satisfaction impacts overall mental health and can address work-related stress, burnout, and professional identity concerns.",
                "Seek a career counselor if work-related stress is affecting your mental health, you're experiencing burnout, feeling unfulfilled in your career, facing a major job transition, or wanting to align your work with your personality strengths and core values.",
                Priority::Low,
            ),
        };
        HealthProfessional {
            kind: self,
            title: title.into(),
            description: description.into(),
            when_to_visit: when_to_visit.into(),
            priority,
        }
    }
}
